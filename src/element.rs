//! Normalized document tree.
//!
//! Both input formats are lowered into [`Element`] before inference so the
//! schema builder only ever sees one shape of tree. The JSON and XML
//! adapters live in the submodules.
pub mod json;
pub mod xml;

use std::path::Path;

use crate::error::Result;

// ------------------------------- Types ----------------------------------- //

#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(f64),
    /// A JSON string; typed as-is.
    Str(String),
    /// XML character data whose type has to be sniffed.
    Token(String),
}

/// Where a container came from. Only XML containers go through the
/// name-based list detection; JSON says array vs. object explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    JsonObject,
    JsonArray,
    Xml,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pub origin: Origin,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<(String, Element)>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Scalar(Scalar),
    Container(Container),
}

impl Element {
    pub fn token(text: impl Into<String>) -> Self {
        Element::Scalar(Scalar::Token(text.into()))
    }

    pub fn xml(attributes: Vec<(String, String)>, children: Vec<(String, Element)>) -> Self {
        Element::Container(Container { origin: Origin::Xml, attributes, children })
    }
}

// ------------------------------- Format ---------------------------------- //

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    /// Sniff the format from the first non-whitespace character.
    pub fn detect(text: &str) -> Self {
        match text.trim_start().as_bytes().first() {
            Some(b'<') => Format::Xml,
            _ => Format::Json,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "xml" => Some(Format::Xml),
            _ => None,
        }
    }
}

/// Parse raw text into an element tree.
pub fn parse(text: &str, format: Format) -> Result<Element> {
    match format {
        Format::Json => {
            let value = crate::path_de::parse_json(text)?;
            Ok(json::from_value(&value))
        }
        Format::Xml => xml::parse(text),
    }
}

// ------------------------------- Tests ------------------------------------ //
