use tracing_subscriber::{fmt, EnvFilter};

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set and valid; otherwise `level` (normally
/// `AppConfig::log_level`, read from `LOG_LEVEL`) is used as the filter.
pub fn init_tracing(level: &str) {
    fmt().with_env_filter(env_filter(level)).with_target(true).init();
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn configured_level_is_used_without_rust_log() {
        env::remove_var("RUST_LOG");
        assert_eq!(env_filter("warn").to_string(), "warn");
    }
}
