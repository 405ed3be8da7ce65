use serde_json::{Map, Value};

use super::{Container, Element, Origin, Scalar};

/// JSON → element tree. Object entries keep document order (serde_json is
/// built with `preserve_order`); array children are named by index.
pub fn from_value(v: &Value) -> Element {
    match v {
        Value::Null => Element::Scalar(Scalar::Null),
        Value::Bool(b) => Element::Scalar(Scalar::Bool(*b)),
        Value::Number(n) => {
            let f = if let Some(i) = n.as_i64() {
                i as f64
            } else if let Some(u) = n.as_u64() {
                u as f64
            } else {
                n.as_f64().unwrap_or(f64::NAN)
            };
            Element::Scalar(Scalar::Number(f))
        }
        Value::String(s) => Element::Scalar(Scalar::Str(s.clone())),
        Value::Array(xs) => from_array(xs),
        Value::Object(m) => from_object(m),
    }
}

fn from_array(xs: &[Value]) -> Element {
    let children = xs
        .iter()
        .enumerate()
        .map(|(i, el)| (i.to_string(), from_value(el)))
        .collect();
    Element::Container(Container { origin: Origin::JsonArray, attributes: Vec::new(), children })
}

fn from_object(map: &Map<String, Value>) -> Element {
    let children = map.iter().map(|(k, v)| (k.clone(), from_value(v))).collect();
    Element::Container(Container { origin: Origin::JsonObject, attributes: Vec::new(), children })
}
