use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::AppState;

use super::requests::AnalyzeRequest;
use super::responses::AnalyzeResponse;

pub async fn analyze(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let request = AnalyzeRequest::try_from(body)?;

    tracing::info!(
        content_len = request.content.len(),
        model = state.analyzer.model(),
        "analysis requested"
    );

    let result = state.analyzer.analyze_to_json(&request.content).await?;

    Ok(Json(AnalyzeResponse { result }))
}
