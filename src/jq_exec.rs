//! jq pre-filtering of JSON samples (jaq).
use jaq_core::{compile::Undefined, load, Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

use crate::error::{Error, Result};

/// Run `filter_src` over `input`, returning every output as JSON.
pub fn run_jaq(filter_src: &str, input: &Value) -> Result<Vec<Value>> {
    let loader = load::Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = load::Arena::default();
    let program = load::File { code: filter_src, path: () };

    let modules = loader
        .load(&arena, program)
        .map_err(format_parse_errors)?;

    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(format_undefined_errors)?;

    let inputs = RcIter::new(core::iter::empty());
    let mut it = filter.run((Ctx::new([], &inputs), Val::from(input.clone())));

    let mut out = Vec::new();
    while let Some(item) = it.next() {
        let v = item.map_err(|e| Error::invalid(format!("jq `{filter_src}`: {e:?}")))?;
        // round-trip through text; jaq values print as JSON
        let v = serde_json::from_str::<Value>(&v.to_string())
            .map_err(|e| Error::malformed(format!("jq `{filter_src}` produced non-JSON output: {e}")))?;
        out.push(v);
    }
    Ok(out)
}

/// A sample is exactly one document; the filter must produce one value.
pub fn select_one(filter_src: &str, input: &Value) -> Result<Value> {
    let mut outputs = run_jaq(filter_src, input)?;
    match outputs.len() {
        1 => Ok(outputs.remove(0)),
        n => Err(Error::invalid(format!(
            "jq `{filter_src}` yielded {n} values; exactly one sample document is required"
        ))),
    }
}

fn format_parse_errors(
    errs: Vec<(load::File<&str, ()>, load::Error<&str>)>,
) -> Error {
    let mut s = String::new();
    for (file, err) in errs {
        s.push_str(&format!("parse error: {err:?} in `{}`\n", file.code));
    }
    Error::invalid(s.trim_end())
}

fn format_undefined_errors(
    errs: Vec<(load::File<&str, ()>, Vec<(&str, Undefined)>)>,
) -> Error {
    let mut s = String::new();
    for (file, list) in errs {
        for (name, undef) in list {
            s.push_str(&format!("undefined `{name}`: {undef:?} in `{}`\n", file.code));
        }
    }
    Error::invalid(s.trim_end())
}
