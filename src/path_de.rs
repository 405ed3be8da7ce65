use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Deserialize with JSON-path context in error messages.
///
/// The whole input must be one document; trailing non-whitespace is an error.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(src);
    let value = serde_path_to_error::deserialize::<_, T>(&mut *de).map_err(|err| {
        let path = err.path().to_string();
        Error::malformed(format!("at JSON path {path} → {}", err.into_inner()))
    })?;
    de.end()
        .map_err(|err| Error::malformed(format!("after JSON document: {err}")))?;
    Ok(value)
}

/// Parse a JSON sample document.
pub fn parse_json(src: &str) -> Result<Value> {
    from_str_with_path::<Value>(src)
}
