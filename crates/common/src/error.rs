use thiserror::Error;

#[derive(Debug, Error)]
pub enum VeracityError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("upstream model error: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type VeracityResult<T> = Result<T, VeracityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_bare_message() {
        let err = VeracityError::Validation("No content provided".to_string());
        assert_eq!(err.to_string(), "No content provided");
    }

    #[test]
    fn upstream_is_prefixed() {
        let err = VeracityError::Upstream("HTTP 503".to_string());
        assert_eq!(err.to_string(), "upstream model error: HTTP 503");
    }
}
