use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_TOKEN_ATTRIBUTE: &str = "token";
pub const DEFAULT_IDENTIFICATION_ATTRIBUTE: &str = "email";

/// Attribute names used to look up credentials and to label them in the
/// header value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizerConfig {
    /// Session key holding the token (default: "token").
    #[serde(default = "default_token_attribute_name")]
    pub token_attribute_name: String,
    /// Session key holding the user identification (default: "email").
    #[serde(default = "default_identification_attribute_name")]
    pub identification_attribute_name: String,
}

fn default_token_attribute_name() -> String {
    DEFAULT_TOKEN_ATTRIBUTE.to_string()
}

fn default_identification_attribute_name() -> String {
    DEFAULT_IDENTIFICATION_ATTRIBUTE.to_string()
}

impl AuthorizerConfig {
    pub fn new(
        token_attribute_name: impl Into<String>,
        identification_attribute_name: impl Into<String>,
    ) -> Self {
        Self {
            token_attribute_name: token_attribute_name.into(),
            identification_attribute_name: identification_attribute_name.into(),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.token_attribute_name.is_empty() {
            return Err(Error::EmptyAttributeName {
                field: "token_attribute_name",
            });
        }
        if self.identification_attribute_name.is_empty() {
            return Err(Error::EmptyAttributeName {
                field: "identification_attribute_name",
            });
        }
        Ok(())
    }
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            token_attribute_name: default_token_attribute_name(),
            identification_attribute_name: default_identification_attribute_name(),
        }
    }
}
