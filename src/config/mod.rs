mod loader;
mod types;

pub use loader::default_config_path;
pub use types::{AuthorizerConfig, DEFAULT_IDENTIFICATION_ATTRIBUTE, DEFAULT_TOKEN_ATTRIBUTE};
