use crate::element::{Container, Element, Origin, Scalar};
use crate::error::{Error, Result};

/// What an element denotes, borrowing the part the builder needs next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape<'e> {
    Null,
    Primitive(&'e Scalar),
    List(&'e Container),
    Object(&'e Container),
}

pub fn classify(element: &Element) -> Result<Shape<'_>> {
    match element {
        Element::Scalar(Scalar::Null) => Ok(Shape::Null),
        Element::Scalar(Scalar::Token(t)) if t.is_empty() => Ok(Shape::Null),
        Element::Scalar(s) => Ok(Shape::Primitive(s)),
        Element::Container(c) => classify_container(c),
    }
}

fn classify_container(c: &Container) -> Result<Shape<'_>> {
    match c.origin {
        Origin::JsonArray | Origin::JsonObject if !c.attributes.is_empty() => {
            Err(Error::unsupported(format!(
                "{:?} container carries {} attribute(s)",
                c.origin,
                c.attributes.len()
            )))
        }
        Origin::JsonArray => Ok(Shape::List(c)),
        Origin::JsonObject => Ok(Shape::Object(c)),
        Origin::Xml => Ok(classify_xml(c)),
    }
}

// Attributes force an object. Otherwise children that all share one tag
// name form a list; a single child trivially does.
fn classify_xml(c: &Container) -> Shape<'_> {
    if !c.attributes.is_empty() {
        return Shape::Object(c);
    }
    let Some((first, _)) = c.children.first() else {
        // bare tag without text
        return Shape::Null;
    };
    if c.children.iter().all(|(name, _)| name == first) {
        Shape::List(c)
    } else {
        Shape::Object(c)
    }
}
