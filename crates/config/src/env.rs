use std::env;
use veracity_common::error::{VeracityError, VeracityResult};

pub const DEFAULT_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub static_dir: String,
    /// Upper bound on request bodies accepted by the API.
    pub max_body_bytes: usize,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads the vars, falling back to defaults.
    pub fn from_env() -> VeracityResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "5000")
                .parse()
                .map_err(|e| VeracityError::Config(format!("invalid PORT: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
            static_dir: get_var_or("STATIC_DIR", "static"),
            max_body_bytes: match env::var("MAX_BODY_BYTES") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|e| VeracityError::Config(format!("invalid MAX_BODY_BYTES: {e}")))?,
                Err(_) => DEFAULT_MAX_BODY_BYTES,
            },
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_csv_list(&raw))
                .unwrap_or_default(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read a variable that has no sensible default.
pub fn get_var(key: &str) -> VeracityResult<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(VeracityError::Config(format!(
            "{key} is required but not set"
        ))),
    }
}

pub fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Split a comma-separated value, trimming entries and dropping blanks.
pub fn parse_csv_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn config_from_env_uses_defaults() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("STATIC_DIR");
        env::remove_var("CORS_ALLOWED_ORIGINS");
        env::remove_var("MAX_BODY_BYTES");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.static_dir, "static");
        assert!(cfg.cors_allowed_origins.is_empty());
    }

    #[test]
    fn config_from_env_fails_with_bad_port() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("PORT", "not-a-port");
        let result = AppConfig::from_env();
        env::remove_var("PORT");

        match result {
            Err(VeracityError::Config(msg)) => assert!(msg.contains("PORT")),
            other => panic!("expected config error, got: {other:?}"),
        }
    }

    #[test]
    fn config_reads_and_validates_max_body_bytes() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("MAX_BODY_BYTES", "1048576");
        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.max_body_bytes, 1_048_576);

        env::set_var("MAX_BODY_BYTES", "lots");
        let result = AppConfig::from_env();
        env::remove_var("MAX_BODY_BYTES");

        match result {
            Err(VeracityError::Config(msg)) => assert!(msg.contains("MAX_BODY_BYTES")),
            other => panic!("expected config error, got: {other:?}"),
        }
    }

    #[test]
    fn config_reads_cors_origins() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:3000, ,http://127.0.0.1:3000",
        );
        let cfg = AppConfig::from_env().expect("should parse config");
        env::remove_var("CORS_ALLOWED_ORIGINS");

        assert_eq!(
            cfg.cors_allowed_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }

    #[test]
    fn get_var_rejects_missing_and_blank() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::remove_var("_VERACITY_TEST_REQUIRED");
        assert!(get_var("_VERACITY_TEST_REQUIRED").is_err());

        env::set_var("_VERACITY_TEST_REQUIRED", "   ");
        assert!(get_var("_VERACITY_TEST_REQUIRED").is_err());

        env::set_var("_VERACITY_TEST_REQUIRED", "value");
        assert_eq!(get_var("_VERACITY_TEST_REQUIRED").unwrap(), "value");
        env::remove_var("_VERACITY_TEST_REQUIRED");
    }

    #[test]
    fn bind_addr_formats_correctly() {
        let cfg = AppConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            log_level: "debug".to_owned(),
            static_dir: "static".to_owned(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            cors_allowed_origins: vec![],
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    }
}
