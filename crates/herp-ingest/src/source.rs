//! Where the checklist text comes from.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Location of the delimited-text checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Local file.
    File(PathBuf),
    /// Remote resource fetched over HTTP(S).
    Url(String),
}

impl DatasetSource {
    /// Human-readable origin used in errors and logs.
    pub fn origin(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
        }
    }

    /// Reads the whole source into memory.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Self::File(path) => read_file(path),
            Self::Url(url) => fetch_url(url),
        }
    }
}

impl FromStr for DatasetSource {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(Self::Url(trimmed.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.origin())
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    debug!(path = %path.display(), "reading dataset file");
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

fn fetch_url(url: &str) -> Result<Vec<u8>> {
    debug!(url, "fetching dataset");
    let fetch_error = |source| IngestError::Fetch {
        url: url.to_string(),
        source,
    };
    let client = Client::builder().build().map_err(fetch_error)?;
    let response = client
        .get(url)
        .header(
            USER_AGENT,
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
        )
        .send()
        .map_err(fetch_error)?;
    if !response.status().is_success() {
        return Err(IngestError::HttpStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }
    let body = response.bytes().map_err(fetch_error)?;
    Ok(body.to_vec())
}
