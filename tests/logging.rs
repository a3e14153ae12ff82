mod common;

use common::{session, EMAIL, TOKEN};
use token_authorizer::logging::{init_tracing, LOG_ENV_VAR};
use token_authorizer::{Authorizer, TokenAuthorizer};

#[test]
fn test_init_tracing_opt_in() {
    std::env::remove_var(LOG_ENV_VAR);
    assert!(!init_tracing());

    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("authorizer.log");
    std::env::set_var(LOG_ENV_VAR, &log_path);
    std::env::set_var("RUST_LOG", "trace");

    assert!(init_tracing());
    assert!(log_path.exists());

    // Subscriber already installed
    assert!(!init_tracing());

    let authorizer = TokenAuthorizer::default();
    assert!(authorizer
        .build_header(&session(&[("token", TOKEN), ("email", EMAIL)]))
        .is_some());
    assert!(authorizer
        .build_header(&session(&[("token", TOKEN)]))
        .is_none());

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Built authorization header"));
    assert!(log.contains("attribute=email"));
    assert!(!log.contains(TOKEN));
    assert!(!log.contains(EMAIL));
}
