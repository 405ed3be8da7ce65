use indexmap::IndexMap;
use pojo_infer::{generate, Error, Format, InferenceOptions, SchemaNode};
use pretty_assertions::assert_eq;

fn fields(pairs: &[(&str, SchemaNode)]) -> IndexMap<String, SchemaNode> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[test]
fn json_sample_end_to_end() {
    let src = r#"{"id": 5, "tags": ["a", "b"], "owner": {"name": "x"}}"#;
    let out = generate(src, Format::Json, "com.x.Root", &InferenceOptions::default()).unwrap();

    assert_eq!(out.root, SchemaNode::object_ref("com.x.Root"));
    assert_eq!(out.registry.names().collect::<Vec<_>>(), ["com.x.Owner", "com.x.Root"]);
    assert_eq!(
        out.registry.get("com.x.Root").unwrap().fields,
        fields(&[
            ("id", SchemaNode::Integer),
            ("tags", SchemaNode::list_of(SchemaNode::String)),
            ("owner", SchemaNode::object_ref("com.x.Owner")),
        ])
    );

    let files = pojo_infer::codegen::emit_registry(&out.registry).unwrap();
    let root = files.iter().find(|f| f.path.ends_with("Root.java")).unwrap();
    assert!(root.contents.contains("private List<String> tags;"));
    assert!(root.contents.contains("public Owner getOwner() {"));
}

#[test]
fn xml_sample_end_to_end() {
    let src = r#"<?xml version="1.0"?>
<catalog version="2">
  <name>Spring</name>
  <products>
    <product sku="A-1"><price>9.99</price><stock>12</stock><active>true</active></product>
    <product sku="B-2"><price>1</price><stock>0</stock><active>false</active></product>
  </products>
</catalog>"#;
    let out = generate(src, Format::Xml, "shop.Catalog", &InferenceOptions::default()).unwrap();

    assert_eq!(
        out.registry.get("shop.Catalog").unwrap().fields,
        fields(&[
            ("version", SchemaNode::Integer),
            ("name", SchemaNode::String),
            ("products", SchemaNode::list_of(SchemaNode::object_ref("shop.product"))),
        ])
    );
    assert_eq!(
        out.registry.get("shop.product").unwrap().fields,
        fields(&[
            ("sku", SchemaNode::String),
            ("price", SchemaNode::Double),
            ("stock", SchemaNode::Integer),
            ("active", SchemaNode::Boolean),
        ])
    );
}

#[test]
fn xml_single_child_quirk() {
    let out = generate("<Root><item>1</item></Root>", Format::Xml, "com.x.Root", &InferenceOptions::default())
        .unwrap();
    assert_eq!(out.root, SchemaNode::list_of(SchemaNode::BoxedInteger));
    assert!(out.registry.is_empty());
}

#[test]
fn generate_is_deterministic() {
    let src = r#"{"a": [{"b": {"c": [1.5]}}], "d": null, "e": 3000000000}"#;
    let opts = InferenceOptions::default();
    let first = generate(src, Format::Json, "p.Root", &opts).unwrap();
    let second = generate(src, Format::Json, "p.Root", &opts).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn dedupe_option_is_applied() {
    let src = r#"{"billing": {"street": "a"}, "shipping": {"street": "b"}}"#;
    let plain = generate(src, Format::Json, "p.Order", &InferenceOptions::default()).unwrap();
    assert_eq!(plain.registry.len(), 3);

    let opts = InferenceOptions { dedupe: true, ..InferenceOptions::default() };
    let merged = generate(src, Format::Json, "p.Order", &opts).unwrap();
    assert_eq!(merged.registry.names().collect::<Vec<_>>(), ["p.Billing", "p.Order"]);
}

#[test]
fn schema_view_serializes_types() {
    let out = generate(r#"{"xs": [1], "o": {}}"#, Format::Json, "p.R", &InferenceOptions::default()).unwrap();
    let view = serde_json::to_value(&out).unwrap();
    assert_eq!(view["root"], serde_json::json!({"ObjectRef": "p.R"}));
    assert_eq!(
        view["classes"]["p.R"]["fields"]["xs"],
        serde_json::json!({"ListOf": "BoxedInteger"})
    );
}

#[test]
fn errors_are_fatal() {
    let opts = InferenceOptions::default();
    assert!(matches!(
        generate("{", Format::Json, "p.R", &opts),
        Err(Error::MalformedInput { .. })
    ));
    assert!(matches!(
        generate("[1] [2]", Format::Json, "p.R", &opts),
        Err(Error::MalformedInput { .. })
    ));
    assert!(matches!(
        generate("<a>", Format::Xml, "p.R", &opts),
        Err(Error::MalformedInput { .. })
    ));
    assert!(matches!(
        generate("{}", Format::Json, "NoPackage", &opts),
        Err(Error::InvalidArgument { .. })
    ));
}
