// Lowering: class definition → field + accessor descriptors for an emitter.
//
// Naming contract: `get<Field>` (or `is<Field>` for Boolean fields) returns
// the field; `set<Field>` takes one parameter of the field's type, named
// like the field, and assigns it.

use crate::error::Result;
use crate::inference::name::{capitalize_first, split_qualified};
use crate::ir::{ClassDefinition, ClassRegistry, SchemaNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassModel {
    pub qualified_name: String,
    pub package: String,
    pub simple_name: String,
    pub fields: Vec<FieldModel>,     // declaration order
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldModel {
    pub name: String,
    pub ty: SchemaNode,
    pub getter: Getter,
    pub setter: Setter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Getter {
    pub name: String,
    pub returns: SchemaNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setter {
    pub name: String,
    pub param: String,
    pub param_ty: SchemaNode,
}

pub fn lower_class(def: &ClassDefinition) -> Result<ClassModel> {
    let (package, simple_name) = split_qualified(&def.qualified_name);
    let fields = def
        .fields
        .iter()
        .map(|(name, ty)| lower_field(name, ty))
        .collect::<Result<Vec<_>>>()?;
    Ok(ClassModel {
        qualified_name: def.qualified_name.clone(),
        package: package.to_string(),
        simple_name: simple_name.to_string(),
        fields,
    })
}

pub fn lower_registry(registry: &ClassRegistry) -> Result<Vec<ClassModel>> {
    registry.iter().map(lower_class).collect()
}

fn lower_field(name: &str, ty: &SchemaNode) -> Result<FieldModel> {
    let cap = capitalize_first(name)?;
    let prefix = if ty.is_boolean() { "is" } else { "get" };
    Ok(FieldModel {
        name: name.to_string(),
        ty: ty.clone(),
        getter: Getter { name: format!("{prefix}{cap}"), returns: ty.clone() },
        setter: Setter { name: format!("set{cap}"), param: name.to_string(), param_ty: ty.clone() },
    })
}
