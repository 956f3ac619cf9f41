//! Collection parsing and conversion
//!
//! Parsing is strict JSON decoding, done here so that malformed input is
//! reported with a stable message before the conversion engine ever runs.
//! The Postman-to-OpenAPI mapping itself is delegated to the
//! `postman2openapi` engine and treated as opaque.

use crate::error::{ConvertError, Result};
use postman2openapi::{from_str, TargetFormat, TranspileOptions};
use serde_json::Value;

/// Parse raw collection text into a JSON document.
pub fn parse(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(ConvertError::MalformedInput)
}

/// Convert a parsed collection into an OpenAPI document.
///
/// Engine failures propagate with their message intact; they are not
/// retried or rewrapped. The engine is asked for canonical JSON and its
/// output decoded back into a document value, so output rendering stays
/// under the caller's control.
pub fn convert(collection: &Value) -> Result<Value> {
    let raw = serde_json::to_string(collection)?;
    let spec = from_str(
        &raw,
        TranspileOptions {
            format: TargetFormat::Json,
        },
    )
    .map_err(ConvertError::Conversion)?;

    Ok(serde_json::from_str(&spec)?)
}
