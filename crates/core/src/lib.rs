//! Core pipeline for converting Postman collections to OpenAPI
//!
//! The pipeline runs strictly in sequence for each invocation:
//! resolve input → parse → convert → render → write. Input can come from
//! a file, an HTTP(S) URL, or standard input; output is pretty JSON or
//! block YAML. The Postman-to-OpenAPI mapping itself is delegated to the
//! `postman2openapi` engine.

pub mod collection;
pub mod error;
pub mod input;
pub mod output;

pub use error::{ConvertError, Result};
pub use input::InputSource;
pub use output::OutputFormat;

/// Convert raw collection text into rendered OpenAPI output.
///
/// Convenience wrapper over the parse → convert → render stages, for
/// callers that already hold the collection text.
///
/// # Example
/// ```rust,ignore
/// let rendered = pm2oa_core::transpile_collection(&text, OutputFormat::Yaml)?;
/// ```
pub fn transpile_collection(raw: &str, format: OutputFormat) -> Result<String> {
    let collection = collection::parse(raw)?;
    let document = collection::convert(&collection)?;
    output::render(&document, format)
}
