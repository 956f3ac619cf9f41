//! Collection input resolution
//!
//! A collection can come from a local file, an HTTP(S) URL, or standard
//! input. Exactly one source is selected per invocation, based solely on
//! the shape of the positional argument.

use crate::error::{ConvertError, Result};
use reqwest::blocking::Client;
use std::fmt;
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Client handed to [`InputSource::resolve`] for URL inputs.
pub type HttpClient = Client;

/// Build the HTTP client used for URL inputs.
///
/// Called once at startup, before argument parsing, so that a build
/// without a working TLS backend fails fast instead of midway through a
/// conversion. No request timeout is configured: a hanging upstream
/// stalls the invocation.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(None)
        .build()
        .map_err(ConvertError::HttpClient)
}

/// Where the raw collection text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Fetch over HTTP(S)
    Url(String),
    /// Read from a local file
    File(PathBuf),
    /// Drain standard input
    Stdin,
}

impl InputSource {
    /// Classify the positional argument into a source.
    ///
    /// Anything starting with `http://` or `https://` is a URL, any other
    /// present value is a file path, and an absent value selects stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(s) if s.starts_with("http://") || s.starts_with("https://") => {
                InputSource::Url(s.to_string())
            }
            Some(s) => InputSource::File(PathBuf::from(s)),
            None => InputSource::Stdin,
        }
    }

    /// Fetch the raw collection text from this source.
    ///
    /// Whatever the source, text that turns out to be empty or
    /// whitespace-only is rejected before it reaches the parser.
    pub fn resolve(&self, client: &Client) -> Result<String> {
        let text = match self {
            InputSource::Url(url) => fetch_url(client, url)?,
            InputSource::File(path) => read_file(path)?,
            InputSource::Stdin => read_stdin()?,
        };

        if text.trim().is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        Ok(text)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Url(url) => write!(f, "{url}"),
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "standard input"),
        }
    }
}

fn fetch_url(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| ConvertError::Request {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ConvertError::Fetch {
            status: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        });
    }

    response.text().map_err(|e| ConvertError::Request {
        url: url.to_string(),
        source: e,
    })
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ConvertError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_stdin() -> Result<String> {
    let stdin = std::io::stdin();

    // An interactive terminal means nothing was piped in; bail out
    // instead of blocking on a read that will never complete.
    if stdin.is_terminal() {
        return Err(ConvertError::NoInput);
    }

    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .map_err(|e| ConvertError::FileRead {
            path: PathBuf::from("<stdin>"),
            source: e,
        })?;

    if buffer.is_empty() {
        return Err(ConvertError::NoInput);
    }

    Ok(buffer)
}
