//! Token-scheme authorization.
//!
//! Builds `Authorization: Token <token_attr>="<token>", <id_attr>="<id>"`
//! from session credentials. Names and values are interpolated as-is;
//! quotes inside values are not escaped.
//!
//! The header is computed once by [`build_header`]. The callback and
//! deferred entry points on [`Authorizer`] both delegate to it.

use std::future::{ready, Ready};

use crate::config::AuthorizerConfig;
use crate::credentials::CredentialRecord;
use crate::header::AuthorizationHeader;

/// A strategy that turns session credentials into an authorization header.
pub trait Authorizer {
    /// Returns `None` when the credentials are insufficient.
    fn build_header(&self, credentials: &CredentialRecord) -> Option<AuthorizationHeader>;

    /// Invoke `callback` with `(header_name, header_value)` before returning,
    /// or not at all when the credentials are insufficient.
    fn authorize_with<F>(&self, credentials: &CredentialRecord, callback: F)
    where
        F: FnOnce(&str, &str),
    {
        if let Some(header) = self.build_header(credentials) {
            callback(&header.header_name, &header.header_value);
        }
    }

    /// Deferred form of [`Authorizer::authorize_with`]. The future is ready
    /// immediately and resolves to `None` when not authorized.
    fn authorize(&self, credentials: &CredentialRecord) -> Ready<Option<AuthorizationHeader>> {
        ready(self.build_header(credentials))
    }
}

/// Authorizer for the `Token` scheme with configurable attribute names.
#[derive(Debug, Clone, Default)]
pub struct TokenAuthorizer {
    config: AuthorizerConfig,
}

impl TokenAuthorizer {
    pub fn new(config: AuthorizerConfig) -> Self {
        Self { config }
    }

    /// Attribute names this authorizer reads and emits.
    pub fn config(&self) -> &AuthorizerConfig {
        &self.config
    }
}

impl Authorizer for TokenAuthorizer {
    fn build_header(&self, credentials: &CredentialRecord) -> Option<AuthorizationHeader> {
        build_header(credentials, &self.config)
    }
}

/// Build the token header.
///
/// Returns `Some(header)` if both configured attributes are present and
/// non-empty, or `None` otherwise.
pub fn build_header(
    credentials: &CredentialRecord,
    config: &AuthorizerConfig,
) -> Option<AuthorizationHeader> {
    let token_attr = config.token_attribute_name.as_str();
    let id_attr = config.identification_attribute_name.as_str();

    let Some(token) = non_empty(credentials, token_attr) else {
        tracing::debug!(attribute = %token_attr, "Token missing, not authorizing");
        return None;
    };
    let Some(id) = non_empty(credentials, id_attr) else {
        tracing::debug!(attribute = %id_attr, "Identification missing, not authorizing");
        return None;
    };

    tracing::trace!(
        token_attribute = %token_attr,
        identification_attribute = %id_attr,
        "Built authorization header"
    );
    Some(AuthorizationHeader::new(format!(
        "Token {}=\"{}\", {}=\"{}\"",
        token_attr, token, id_attr, id
    )))
}

fn non_empty<'a>(credentials: &'a CredentialRecord, key: &str) -> Option<&'a str> {
    credentials.get(key).filter(|value| !value.is_empty())
}
