use serde_json::Value;
use veracity_common::error::VeracityError;

pub const NO_CONTENT_MESSAGE: &str = "No content provided";

#[derive(Debug)]
pub struct AnalyzeRequest {
    pub content: String,
}

impl TryFrom<Value> for AnalyzeRequest {
    type Error = VeracityError;

    /// `content` must be a non-empty string; any other shape is a missing content error.
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        match body.get("content").and_then(Value::as_str) {
            Some(content) if !content.is_empty() => Ok(Self {
                content: content.to_string(),
            }),
            _ => Err(VeracityError::Validation(NO_CONTENT_MESSAGE.to_string())),
        }
    }
}
