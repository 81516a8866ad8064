use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

pub const NO_JSON_MESSAGE: &str = "No JSON data received";
pub const TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Request body parsed as arbitrary JSON.
///
/// Unlike `axum::Json`, the content type is not checked, and every failure
/// (empty body, invalid JSON, `null`) maps to the same 400 response. A body
/// over the router's `DefaultBodyLimit` is a 413.
pub struct JsonBody(pub Value);

#[derive(Debug, PartialEq, Eq)]
pub enum JsonBodyRejection {
    NoJson,
    TooLarge,
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NoJson => (StatusCode::BAD_REQUEST, NO_JSON_MESSAGE),
            Self::TooLarge => (StatusCode::PAYLOAD_TOO_LARGE, TOO_LARGE_MESSAGE),
        };
        tracing::warn!(status = status.as_u16(), error = message, "rejected request");
        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl<S: Send + Sync> FromRequest<S> for JsonBody {
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => JsonBodyRejection::TooLarge,
                _ => JsonBodyRejection::NoJson,
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(JsonBodyRejection::NoJson);
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Null) | Err(_) => Err(JsonBodyRejection::NoJson),
            Ok(value) => Ok(JsonBody(value)),
        }
    }
}
