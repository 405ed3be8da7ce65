// Class-schema IR produced by inference and consumed by lowering/codegen.

use indexmap::IndexMap;
use serde::Serialize;

/// Inferred type of one field or list-element position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SchemaNode {
    Null,                    // no value sampled; emitted as an untyped reference
    Boolean,
    Integer,
    Long,
    Double,
    String,
    BoxedInteger,            // only as a list element
    BoxedLong,
    BoxedDouble,
    ListOf(Box<SchemaNode>),
    ObjectRef(String),       // qualified class name
}

impl SchemaNode {
    pub fn list_of(item: SchemaNode) -> Self {
        SchemaNode::ListOf(Box::new(item))
    }

    pub fn object_ref(qualified_name: impl Into<String>) -> Self {
        SchemaNode::ObjectRef(qualified_name.into())
    }

    /// Numeric primitives become their reference equivalents so they can be a
    /// generic list's type argument. Everything else is returned unchanged.
    pub fn boxed(self) -> Self {
        match self {
            SchemaNode::Integer => SchemaNode::BoxedInteger,
            SchemaNode::Long => SchemaNode::BoxedLong,
            SchemaNode::Double => SchemaNode::BoxedDouble,
            other => other,
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, SchemaNode::Boolean)
    }
}

/// One generated record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDefinition {
    pub qualified_name: String,
    pub fields: IndexMap<String, SchemaNode>,   // first-seen order
}

impl ClassDefinition {
    pub fn new(qualified_name: impl Into<String>, fields: IndexMap<String, SchemaNode>) -> Self {
        Self { qualified_name: qualified_name.into(), fields }
    }

    /// Ordered (name, type) sequence; two classes with equal signatures are
    /// structurally identical.
    pub fn signature(&self) -> Vec<(&str, &SchemaNode)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }
}

/// Every class discovered during one inference run, keyed by qualified name
/// in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassRegistry {
    classes: IndexMap<String, ClassDefinition>,
}

impl ClassRegistry {
    pub fn new() -> Self { Self::default() }

    /// Insert `def`, replacing any class already registered under the same
    /// qualified name. Returns the replaced definition.
    pub fn register(&mut self, def: ClassDefinition) -> Option<ClassDefinition> {
        self.classes.insert(def.qualified_name.clone(), def)
    }

    pub fn get(&self, qualified_name: &str) -> Option<&ClassDefinition> {
        self.classes.get(qualified_name)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.classes.contains_key(qualified_name)
    }

    pub fn len(&self) -> usize { self.classes.len() }
    pub fn is_empty(&self) -> bool { self.classes.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes.values()
    }
}

impl IntoIterator for ClassRegistry {
    type Item = ClassDefinition;
    type IntoIter = indexmap::map::IntoValues<String, ClassDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.into_values()
    }
}

impl FromIterator<ClassDefinition> for ClassRegistry {
    fn from_iter<I: IntoIterator<Item = ClassDefinition>>(iter: I) -> Self {
        let mut registry = ClassRegistry::new();
        for def in iter {
            registry.register(def);
        }
        registry
    }
}

/// Result of one inference: the root's type plus the classes it reaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inferred {
    pub root: SchemaNode,
    #[serde(rename = "classes")]
    pub registry: ClassRegistry,
}
