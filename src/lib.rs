//! Infer a nominal class schema from one sample JSON or XML document and
//! emit Java record classes (fields + getters/setters) for it.
//!
//! Pipeline: text → [`element`] tree → [`inference`] → [`ir::Inferred`]
//! (root type + class registry) → optional [`dedup`] → [`lower`] →
//! [`codegen`].
pub mod error;
pub mod element;
pub mod inference;
pub mod ir;
pub mod dedup;
pub mod lower;
pub mod codegen;
pub mod cli;
pub mod jq_exec;
pub mod path_de;

pub use element::{Element, Format};
pub use error::{Error, Result};
pub use inference::{InferenceOptions, StringTyping};
pub use ir::{ClassDefinition, ClassRegistry, Inferred, SchemaNode};

/// Parse `text` and infer its schema under `root_name` (`package.ClassName`).
/// Pure: each call owns its registry.
pub fn generate(text: &str, format: Format, root_name: &str, options: &InferenceOptions) -> Result<Inferred> {
    let element = element::parse(text, format)?;
    infer(&element, root_name, options)
}

/// Like [`generate`], over an already-normalized element tree.
pub fn infer(element: &Element, root_name: &str, options: &InferenceOptions) -> Result<Inferred> {
    let inferred = inference::run(element, root_name, options)?;
    Ok(if options.dedupe { dedup::deduplicate(inferred) } else { inferred })
}
