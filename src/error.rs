//! Error types for config loading, credential parsing and header conversion.
//!
//! Authorization itself never fails: missing credentials yield no header.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around the authorizer, never by it.
#[derive(Debug, Error)]
pub enum Error {
    /// Config file could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// An attribute name was configured as the empty string
    #[error("Attribute name must not be empty: {field}")]
    EmptyAttributeName { field: &'static str },

    /// Session data is not a JSON object
    #[error("Credential parse error: {0}")]
    Credentials(#[from] serde_json::Error),

    /// Header value contains bytes HTTP does not allow
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;
