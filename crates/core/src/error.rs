//! Error types shared across the conversion pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a collection
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to initialize HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to fetch from URL: {status} {reason}")]
    Fetch { status: u16, reason: String },

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No input provided. Pass a file path or URL, or pipe a collection to stdin")]
    NoInput,

    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid JSON format in collection data: {0}")]
    MalformedInput(#[source] serde_json::Error),

    #[error("Invalid format: {0:?} (expected \"json\" or \"yaml\")")]
    InvalidFormat(String),

    #[error("{0}")]
    Conversion(anyhow::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, ConvertError>;
