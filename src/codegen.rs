//! Java source emitter over the lowered class models.
//!
//! One file per registered class at `<package dirs>/<Name>.java`: private
//! fields in declaration order, then a getter/setter pair per field.
//! Identifiers are emitted as-is; no attempt is made to validate them.
use std::path::PathBuf;

use crate::error::Result;
use crate::inference::name::split_qualified;
use crate::ir::{ClassRegistry, SchemaNode};
use crate::lower::{lower_registry, ClassModel};

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
}

pub fn emit_registry(registry: &ClassRegistry) -> Result<Vec<SourceFile>> {
    Ok(lower_registry(registry)?.iter().map(emit_class).collect())
}

pub fn source_path(model: &ClassModel) -> PathBuf {
    let mut path: PathBuf = model.package.split('.').filter(|s| !s.is_empty()).collect();
    path.push(format!("{}.java", model.simple_name));
    path
}

pub fn emit_class(model: &ClassModel) -> SourceFile {
    let mut cg = Codegen::new(&model.package);
    cg.class(model);
    SourceFile { path: source_path(model), contents: cg.into_string() }
}

// ------------------------------- Types ----------------------------------- //

/// Field/parameter type as written in a declaration.
pub fn java_type(ty: &SchemaNode, package: &str) -> String {
    match ty {
        SchemaNode::Null => "Object".into(),
        SchemaNode::Boolean => "boolean".into(),
        SchemaNode::Integer => "int".into(),
        SchemaNode::Long => "long".into(),
        SchemaNode::Double => "double".into(),
        SchemaNode::String => "String".into(),
        SchemaNode::BoxedInteger => "Integer".into(),
        SchemaNode::BoxedLong => "Long".into(),
        SchemaNode::BoxedDouble => "Double".into(),
        SchemaNode::ListOf(item) => format!("List<{}>", java_type_arg(item, package)),
        SchemaNode::ObjectRef(name) => {
            let (pkg, simple) = split_qualified(name);
            if pkg == package { simple.to_string() } else { name.clone() }
        }
    }
}

// A generic argument must be a reference type.
fn java_type_arg(ty: &SchemaNode, package: &str) -> String {
    match ty {
        SchemaNode::Boolean => "Boolean".into(),
        SchemaNode::Integer => "Integer".into(),
        SchemaNode::Long => "Long".into(),
        SchemaNode::Double => "Double".into(),
        other => java_type(other, package),
    }
}

fn uses_list(ty: &SchemaNode) -> bool {
    matches!(ty, SchemaNode::ListOf(_))
}

// ------------------------------- Writer ---------------------------------- //

pub struct Codegen<'p> {
    package: &'p str,
    out: String,
}

impl<'p> Codegen<'p> {
    pub fn new(package: &'p str) -> Self {
        Self { package, out: String::new() }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn class(&mut self, model: &ClassModel) {
        if !self.package.is_empty() {
            self.line(0, &format!("package {};", self.package));
            self.blank();
        }
        if model.fields.iter().any(|f| uses_list(&f.ty)) {
            self.line(0, "import java.util.List;");
            self.blank();
        }

        self.line(0, &format!("public class {} {{", model.simple_name));

        if !model.fields.is_empty() {
            self.blank();
            for f in &model.fields {
                let ty = java_type(&f.ty, self.package);
                self.line(1, &format!("private {ty} {};", f.name));
            }
        }

        for f in &model.fields {
            let ret = java_type(&f.getter.returns, self.package);
            self.blank();
            self.line(1, &format!("public {ret} {}() {{", f.getter.name));
            self.line(2, &format!("return {};", f.name));
            self.line(1, "}");

            let param_ty = java_type(&f.setter.param_ty, self.package);
            self.blank();
            self.line(1, &format!("public void {}({param_ty} {}) {{", f.setter.name, f.setter.param));
            self.line(2, &format!("this.{} = {};", f.name, f.setter.param));
            self.line(1, "}");
        }

        self.blank();
        self.line(0, "}");
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::json;
    use crate::inference::{run, InferenceOptions};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn renders_fields_and_accessors() {
        let out = run(
            &json::from_value(&json!({"id": 5, "active": true, "tags": ["a"], "owner": {"name": "x"}})),
            "com.x.Root",
            &InferenceOptions::default(),
        )
        .unwrap();
        let files = emit_registry(&out.registry).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, PathBuf::from("com/x/Owner.java"));
        assert_eq!(files[1].path, PathBuf::from("com/x/Root.java"));

        let expected = "\
package com.x;

import java.util.List;

public class Root {

    private int id;
    private boolean active;
    private List<String> tags;
    private Owner owner;

    public int getId() {
        return id;
    }

    public void setId(int id) {
        this.id = id;
    }

    public boolean isActive() {
        return active;
    }

    public void setActive(boolean active) {
        this.active = active;
    }

    public List<String> getTags() {
        return tags;
    }

    public void setTags(List<String> tags) {
        this.tags = tags;
    }

    public Owner getOwner() {
        return owner;
    }

    public void setOwner(Owner owner) {
        this.owner = owner;
    }

}
";
        assert_eq!(files[1].contents, expected);
    }

    #[test]
    fn type_mapping() {
        assert_eq!(java_type(&SchemaNode::Null, "p"), "Object");
        assert_eq!(java_type(&SchemaNode::Long, "p"), "long");
        assert_eq!(java_type(&SchemaNode::list_of(SchemaNode::Null), "p"), "List<Object>");
        assert_eq!(java_type(&SchemaNode::list_of(SchemaNode::BoxedDouble), "p"), "List<Double>");
        assert_eq!(java_type(&SchemaNode::list_of(SchemaNode::Boolean), "p"), "List<Boolean>");
        assert_eq!(
            java_type(&SchemaNode::list_of(SchemaNode::list_of(SchemaNode::BoxedLong)), "p"),
            "List<List<Long>>"
        );
        assert_eq!(java_type(&SchemaNode::object_ref("p.Owner"), "p"), "Owner");
        assert_eq!(java_type(&SchemaNode::object_ref("q.Owner"), "p"), "q.Owner");
    }

    #[test]
    fn empty_class_has_no_import() {
        let out = run(&json::from_value(&json!({})), "a.b.Empty", &InferenceOptions::default()).unwrap();
        let files = emit_registry(&out.registry).unwrap();
        assert_eq!(files[0].path, PathBuf::from("a/b/Empty.java"));
        assert_eq!(files[0].contents, "package a.b;\n\npublic class Empty {\n\n}\n");
    }
}
