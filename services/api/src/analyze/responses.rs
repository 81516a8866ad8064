use serde::Serialize;

/// `result` holds the analysis record encoded as a JSON string.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
}
