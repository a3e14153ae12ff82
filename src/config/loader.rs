//! Loading authorizer config from disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::AuthorizerConfig;
use crate::error::{Error, Result};

/// `<config_dir>/token-authorizer/config.toml`, or `None` on platforms
/// without a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("token-authorizer").join("config.toml"))
}

impl AuthorizerConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            token_attribute = %config.token_attribute_name,
            identification_attribute = %config.identification_attribute_name,
            "Loaded authorizer config"
        );
        Ok(config)
    }

    /// Like [`AuthorizerConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path.as_ref()) {
            Err(Error::ConfigRead { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    path = %path.as_ref().display(),
                    "No authorizer config found, using defaults"
                );
                Ok(Self::default())
            }
            other => other,
        }
    }
}
