use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use veracity_common::error::VeracityError;

pub struct ApiError(pub VeracityError);

impl From<VeracityError> for ApiError {
    fn from(err: VeracityError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            VeracityError::Validation(msg) => {
                tracing::warn!(error = %msg, "rejected request");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            other => {
                tracing::error!(error = %other, error_debug = ?other, "analysis failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Analysis failed: {other}"),
                )
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
