//! The `Authorization` header produced by an authorizer.

use std::fmt;

use http::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::error::Result;

/// Name of the header every authorizer emits.
pub const HEADER_NAME: &str = "Authorization";

/// Header name and value for authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationHeader {
    pub header_name: String,
    pub header_value: String,
}

impl AuthorizationHeader {
    pub fn new(header_value: impl Into<String>) -> Self {
        Self {
            header_name: HEADER_NAME.to_string(),
            header_value: header_value.into(),
        }
    }

    /// Split into `(header_name, header_value)`.
    pub fn into_pair(self) -> (String, String) {
        (self.header_name, self.header_value)
    }

    /// Convert the value for use with an HTTP client. The result is marked
    /// sensitive so it is not printed by `Debug`.
    pub fn to_header_value(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&self.header_value)?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Insert into `headers`, replacing any existing `Authorization` entry.
    pub fn apply_to(&self, headers: &mut HeaderMap) -> Result<()> {
        headers.insert(AUTHORIZATION, self.to_header_value()?);
        Ok(())
    }
}

// The value carries the token; only the name is printed.
impl fmt::Debug for AuthorizationHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationHeader")
            .field("header_name", &self.header_name)
            .field("header_value", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_new_fixes_header_name() {
        let header = AuthorizationHeader::new("Token token=\"t\", email=\"e\"");
        assert_eq!(header.header_name, "Authorization");
        assert_eq!(
            header.into_pair(),
            (
                "Authorization".to_string(),
                "Token token=\"t\", email=\"e\"".to_string()
            )
        );
    }

    #[test]
    fn test_debug_redacts_value() {
        let header = AuthorizationHeader::new("Token token=\"secret token!\", email=\"user@email.com\"");
        let printed = format!("{:?}", header);
        assert!(printed.contains("Authorization"));
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("secret token!"));
        assert!(!printed.contains("user@email.com"));
    }

    #[test]
    fn test_apply_replaces_existing() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer old"));

        AuthorizationHeader::new("Token token=\"t\", email=\"e\"")
            .apply_to(&mut headers)
            .unwrap();

        assert_eq!(headers.get_all(AUTHORIZATION).iter().count(), 1);
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, "Token token=\"t\", email=\"e\"");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_control_characters_rejected() {
        let header = AuthorizationHeader::new("Token token=\"a\nb\"");
        assert!(matches!(
            header.to_header_value(),
            Err(Error::InvalidHeaderValue(_))
        ));
    }
}
