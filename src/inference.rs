//! Schema builder: sample document → class schema.
//!
//! Walk one normalized element tree depth-first and produce the inferred
//! type of the root plus a registry with one class per object-shaped
//! element encountered.
//!
//! Rules:
//! - Null shapes infer `Null`; primitives go through the fixed widening
//!   rules in [`prim`].
//! - Lists sample their first element only. An empty list is `ListOf(Null)`.
//!   Numeric element types are boxed.
//! - Objects register `package.ProposedName`, fields in document order
//!   (XML attributes first). Each distinct path gets its own class, and a
//!   later class with the same qualified name replaces the earlier one.
pub mod name;
pub mod prim;
pub mod shape;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::element::{Container, Element, Origin};
use crate::error::Result;
use crate::ir::{ClassDefinition, ClassRegistry, Inferred, SchemaNode};

pub use shape::Shape;

// ------------------------------- Policy ---------------------------------- //

/// How JSON strings are typed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringTyping {
    /// Every JSON string is a String.
    #[default]
    Literal,
    /// JSON strings are sniffed like XML text ("42" ⇒ Integer).
    Sniff,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceOptions {
    pub string_typing: StringTyping,
    /// Collapse structurally identical classes after building.
    pub dedupe: bool,
}

// ------------------------------- Builder --------------------------------- //

/// Owns the registry for exactly one inference run.
pub struct SchemaBuilder<'a> {
    options: &'a InferenceOptions,
    registry: ClassRegistry,
}

impl<'a> SchemaBuilder<'a> {
    pub fn new(options: &'a InferenceOptions) -> Self {
        Self { options, registry: ClassRegistry::new() }
    }

    pub fn build(&mut self, element: &Element, package: &str, proposed_name: &str) -> Result<SchemaNode> {
        match shape::classify(element)? {
            Shape::Null => Ok(SchemaNode::Null),
            Shape::Primitive(scalar) => Ok(prim::classify_scalar(scalar, self.options.string_typing)),
            Shape::List(list) => self.build_list(list, package, proposed_name),
            Shape::Object(obj) => self.build_object(obj, package, proposed_name),
        }
    }

    pub fn finish(self) -> ClassRegistry {
        self.registry
    }

    fn build_list(&mut self, list: &Container, package: &str, proposed_name: &str) -> Result<SchemaNode> {
        let Some((first_name, first)) = list.children.first() else {
            tracing::debug!(name = proposed_name, "empty list, element type unknown");
            return Ok(SchemaNode::list_of(SchemaNode::Null));
        };
        // XML names the element type after the child tag; JSON after the field.
        let element_name = match list.origin {
            Origin::Xml => first_name.clone(),
            Origin::JsonArray | Origin::JsonObject => name::singularize_for_element_name(proposed_name),
        };
        tracing::debug!(
            name = proposed_name,
            element = %element_name,
            len = list.children.len(),
            "sampling first list element"
        );
        let element_schema = self.build(first, package, &element_name)?;
        Ok(SchemaNode::list_of(element_schema.boxed()))
    }

    fn build_object(&mut self, obj: &Container, package: &str, proposed_name: &str) -> Result<SchemaNode> {
        let mut fields = IndexMap::<String, SchemaNode>::new();

        for (attr, value) in &obj.attributes {
            fields.insert(attr.clone(), prim::classify_attribute(value));
        }
        for (field, child) in &obj.children {
            let ty = self.build(child, package, &name::capitalize_first(field)?)?;
            fields.insert(field.clone(), ty);
        }

        let qualified_name = name::qualify(package, proposed_name);
        tracing::debug!(class = %qualified_name, fields = fields.len(), "registered class");
        let def = ClassDefinition::new(qualified_name.clone(), fields);
        if self.registry.register(def).is_some() {
            tracing::debug!(class = %qualified_name, "replaced earlier class with the same name");
        }
        Ok(SchemaNode::ObjectRef(qualified_name))
    }
}

// ------------------------------- Front API -------------------------------- //

/// Infer the schema of `element`, naming the root `root_name`
/// (`package.ClassName`).
pub fn run(element: &Element, root_name: &str, options: &InferenceOptions) -> Result<Inferred> {
    let (package, simple_name) = name::split_root(root_name)?;
    let mut builder = SchemaBuilder::new(options);
    let root = builder.build(element, package, simple_name)?;
    Ok(Inferred { root, registry: builder.finish() })
}

// ------------------------------- Tests ------------------------------------ //
