use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file. Unset means no subscriber is installed.
pub const LOG_ENV_VAR: &str = "TOKEN_AUTHORIZER_LOG";

/// Initialize tracing with file output.
///
/// No-op unless `TOKEN_AUTHORIZER_LOG` is set. Returns whether a subscriber
/// was installed by this call.
pub fn init_tracing() -> bool {
    let Some(log_path) = std::env::var_os(LOG_ENV_VAR) else {
        return false;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!(
            "Warning: Failed to create log file: {}",
            log_path.to_string_lossy()
        );
        return false;
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok()
}
