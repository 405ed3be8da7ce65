//! Scalar → primitive type, with the fixed numeric widening rules:
//! fractional ⇒ Double, integral ≥ `INT32_MAX` ⇒ Long, else Integer.
//!
//! The upper boundary is inclusive and there is no lower bound, so
//! `2147483647` is Long and `-10000000000` is Integer.
use crate::element::Scalar;
use crate::ir::SchemaNode;

use super::StringTyping;

pub const INT32_MAX: i64 = i32::MAX as i64;

pub fn classify_number(v: f64) -> SchemaNode {
    if v != v.round() {
        return SchemaNode::Double;  // also NaN
    }
    // saturating, like a long conversion
    let long_value = v.round() as i64;
    if long_value >= INT32_MAX {
        SchemaNode::Long
    } else {
        SchemaNode::Integer
    }
}

/// Type of a textual token: boolean literal, number, or string. Empty
/// text means no value.
pub fn classify_token(token: &str) -> SchemaNode {
    if token.is_empty() {
        return SchemaNode::Null;
    }
    if token == "true" || token == "false" {
        return SchemaNode::Boolean;
    }
    match parse_number(token) {
        Some(v) => classify_number(v),
        None => SchemaNode::String,
    }
}

/// Type of an XML attribute value. Same rules as [`classify_token`], except
/// an attribute is always present, so empty text is a `String`.
pub fn classify_attribute(value: &str) -> SchemaNode {
    match classify_token(value) {
        SchemaNode::Null => SchemaNode::String,
        node => node,
    }
}

// Decimal grammar only: words the float parser also accepts (`inf`, `NaN`)
// stay strings.
fn parse_number(token: &str) -> Option<f64> {
    let t = token.trim();
    if !t.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    t.parse::<f64>().ok()
}

pub fn classify_scalar(scalar: &Scalar, string_typing: StringTyping) -> SchemaNode {
    let node = match scalar {
        Scalar::Null => SchemaNode::Null,
        Scalar::Bool(_) => SchemaNode::Boolean,
        Scalar::Number(v) => classify_number(*v),
        Scalar::Str(s) => match string_typing {
            StringTyping::Literal => SchemaNode::String,
            StringTyping::Sniff => classify_token(s),
        },
        Scalar::Token(t) => classify_token(t),
    };
    tracing::trace!(?scalar, ?node, "classified primitive");
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_values_are_double() {
        for v in [0.5, -0.25, 3.14159, 1e-9, 2147483647.5, -7.75] {
            assert_eq!(classify_number(v), SchemaNode::Double, "{v}");
        }
        assert_eq!(classify_number(f64::NAN), SchemaNode::Double);
    }

    #[test]
    fn integral_values_widen_at_int32_max() {
        assert_eq!(classify_number(0.0), SchemaNode::Integer);
        assert_eq!(classify_number(5.0), SchemaNode::Integer);
        assert_eq!(classify_number(2147483646.0), SchemaNode::Integer);
        // inclusive boundary
        assert_eq!(classify_number(2147483647.0), SchemaNode::Long);
        assert_eq!(classify_number(2147483648.0), SchemaNode::Long);
        assert_eq!(classify_number(1e15), SchemaNode::Long);
        assert_eq!(classify_number(f64::INFINITY), SchemaNode::Long);
    }

    #[test]
    fn no_lower_bound_check() {
        assert_eq!(classify_number(-1.0), SchemaNode::Integer);
        assert_eq!(classify_number(-10_000_000_000.0), SchemaNode::Integer);
    }

    #[test]
    fn tokens() {
        assert_eq!(classify_token(""), SchemaNode::Null);
        assert_eq!(classify_token("true"), SchemaNode::Boolean);
        assert_eq!(classify_token("false"), SchemaNode::Boolean);
        assert_eq!(classify_token("True"), SchemaNode::String);
        assert_eq!(classify_token("42"), SchemaNode::Integer);
        assert_eq!(classify_token(" 42 "), SchemaNode::Integer);
        assert_eq!(classify_token("42.0"), SchemaNode::Integer);
        assert_eq!(classify_token("-3.5"), SchemaNode::Double);
        assert_eq!(classify_token("1e3"), SchemaNode::Integer);
        assert_eq!(classify_token("2147483647"), SchemaNode::Long);
        assert_eq!(classify_token("99999999999"), SchemaNode::Long);
        assert_eq!(classify_token("hello"), SchemaNode::String);
        assert_eq!(classify_token("12abc"), SchemaNode::String);
        assert_eq!(classify_token("inf"), SchemaNode::String);
        assert_eq!(classify_token("NaN"), SchemaNode::String);
        assert_eq!(classify_token("   "), SchemaNode::String);
    }

    #[test]
    fn attribute_values() {
        assert_eq!(classify_attribute(""), SchemaNode::String);
        assert_eq!(classify_attribute("7"), SchemaNode::Integer);
        assert_eq!(classify_attribute("4.5"), SchemaNode::Double);
        assert_eq!(classify_attribute("true"), SchemaNode::Boolean);
        assert_eq!(classify_attribute("A-1"), SchemaNode::String);
    }

    #[test]
    fn json_strings_are_literal_unless_sniffed() {
        let s = Scalar::Str("123".into());
        assert_eq!(classify_scalar(&s, StringTyping::Literal), SchemaNode::String);
        assert_eq!(classify_scalar(&s, StringTyping::Sniff), SchemaNode::Integer);
        let empty = Scalar::Str(String::new());
        assert_eq!(classify_scalar(&empty, StringTyping::Literal), SchemaNode::String);
        assert_eq!(classify_scalar(&Scalar::Bool(false), StringTyping::Literal), SchemaNode::Boolean);
        assert_eq!(classify_scalar(&Scalar::Null, StringTyping::Literal), SchemaNode::Null);
    }
}
