//! Class-name derivation helpers.
use crate::error::{Error, Result};

/// Uppercase the first character only; the rest is kept verbatim.
pub fn capitalize_first(word: &str) -> Result<String> {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return Err(Error::invalid("cannot derive a class name from an empty field name"));
    };
    let mut out: String = first.to_uppercase().collect();
    out.push_str(chars.as_str());
    Ok(out)
}

/// Element-type name for a list, reusing the list field's name.
///
/// Suffix heuristic, not grammar: `ies` → `y`, else a trailing `s` is
/// dropped. Irregular plurals ("Children") pass through untouched, and a
/// name that would be stripped to nothing is kept as-is.
pub fn singularize_for_element_name(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        return format!("{stem}y");
    }
    match name.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

/// Split `com.acme.Root` into (`com.acme`, `Root`).
pub fn split_root(qualified_name: &str) -> Result<(&str, &str)> {
    let Some((package, simple)) = qualified_name.rsplit_once('.') else {
        return Err(Error::invalid(format!(
            "root name `{qualified_name}` has no package (expected e.g. com.example.{qualified_name})"
        )));
    };
    if package.is_empty() || simple.is_empty() {
        return Err(Error::invalid(format!(
            "root name `{qualified_name}` has an empty package or class segment"
        )));
    }
    Ok((package, simple))
}

pub fn qualify(package: &str, simple_name: &str) -> String {
    format!("{package}.{simple_name}")
}

/// Inverse of [`qualify`]; a name without a dot lives in the default package.
pub fn split_qualified(qualified_name: &str) -> (&str, &str) {
    qualified_name.rsplit_once('.').unwrap_or(("", qualified_name))
}
