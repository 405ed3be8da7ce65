use roxmltree::{Document, Node, ParsingOptions};

use super::{Container, Element, Origin, Scalar};
use crate::error::{Error, Result};

/// XML → element tree, rooted at the document element.
pub fn parse(text: &str) -> Result<Element> {
    let opts = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
    let doc = Document::parse_with_options(text, opts)
        .map_err(|e| Error::malformed(format!("xml: {e}")))?;
    Ok(from_node(doc.root_element()))
}

/// A leaf (no attributes, no child elements) becomes a text token; anything
/// else a container. Comments and processing instructions are skipped.
pub fn from_node(node: Node<'_, '_>) -> Element {
    let attributes: Vec<(String, String)> = node
        .attributes()
        .map(|a| (a.name().to_string(), a.value().to_string()))
        .collect();
    let children: Vec<(String, Element)> = node
        .children()
        .filter(|c| c.is_element())
        .map(|c| (c.tag_name().name().to_string(), from_node(c)))
        .collect();

    if attributes.is_empty() && children.is_empty() {
        return Element::Scalar(Scalar::Token(text_of(node)));
    }
    Element::Container(Container { origin: Origin::Xml, attributes, children })
}

// CDATA sections come through as text nodes.
fn text_of(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_elements_become_tokens() {
        let el = parse("<price>12.5</price>").unwrap();
        assert_eq!(el, Element::token("12.5"));

        let empty = parse("<note/>").unwrap();
        assert_eq!(empty, Element::token(""));
    }

    #[test]
    fn attributes_and_children_in_document_order() {
        let el = parse(r#"<book id="7" lang="en"><title>Dune</title><!-- c --><year>1965</year></book>"#)
            .unwrap();
        let Element::Container(c) = el else { panic!("expected container") };
        assert_eq!(c.origin, Origin::Xml);
        assert_eq!(
            c.attributes,
            vec![("id".to_string(), "7".to_string()), ("lang".to_string(), "en".to_string())]
        );
        let names: Vec<&str> = c.children.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["title", "year"]);
        assert_eq!(c.children[1].1, Element::token("1965"));
    }

    #[test]
    fn cdata_is_text() {
        let el = parse("<q><![CDATA[a < b]]></q>").unwrap();
        assert_eq!(el, Element::token("a < b"));
    }

    #[test]
    fn malformed_xml_fails() {
        let err = parse("<a><b></a>").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { .. }));
    }
}
