//! Client-side authorization for token-based HTTP authentication.
//!
//! ```
//! use token_authorizer::{Authorizer, CredentialRecord, TokenAuthorizer};
//!
//! let session: CredentialRecord = [("token", "secret token!"), ("email", "user@email.com")]
//!     .into_iter()
//!     .collect();
//!
//! TokenAuthorizer::default().authorize_with(&session, |name, value| {
//!     assert_eq!(name, "Authorization");
//!     assert_eq!(value, r#"Token token="secret token!", email="user@email.com""#);
//! });
//! ```

pub mod authorizer;
pub mod config;
pub mod credentials;
pub mod error;
pub mod header;
pub mod logging;

pub use authorizer::{build_header, Authorizer, TokenAuthorizer};
pub use config::AuthorizerConfig;
pub use credentials::CredentialRecord;
pub use error::{Error, Result};
pub use header::AuthorizationHeader;
