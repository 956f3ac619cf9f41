//! Output format selection, rendering, and writing

use crate::error::{ConvertError, Result};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Serialization format for the OpenAPI document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON, 2-space indentation
    Json,
    /// Block-style YAML, 2-space indentation, no line wrapping
    Yaml,
}

impl OutputFormat {
    /// Resolve the output format for an invocation.
    ///
    /// Priority: explicit flag, then output-file extension, then json.
    /// An explicit flag wins over a conflicting extension, and is
    /// validated here so that a bad value is rejected before any
    /// conversion work happens.
    pub fn resolve(flag: Option<&str>, output: Option<&Path>) -> Result<Self> {
        if let Some(flag) = flag {
            return flag.parse();
        }

        Ok(output
            .and_then(Self::from_extension)
            .unwrap_or(OutputFormat::Json))
    }

    fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Some(OutputFormat::Yaml),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(ConvertError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Render an OpenAPI document in the selected format.
///
/// Key order is whatever the converter produced; nothing is re-sorted.
/// The rendered text always carries a single trailing newline.
pub fn render(document: &Value, format: OutputFormat) -> Result<String> {
    let mut text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(document)?,
        OutputFormat::Yaml => serde_yaml::to_string(document)?,
    };

    if !text.ends_with('\n') {
        text.push('\n');
    }

    Ok(text)
}

/// Write rendered output to a file, overwriting any existing content.
pub fn write_file(path: &Path, rendered: &str) -> Result<()> {
    fs::write(path, rendered).map_err(|e| ConvertError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
