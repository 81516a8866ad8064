use std::time::Instant;

use veracity_common::error::{VeracityError, VeracityResult};

use crate::completion::CompletionClient;
use crate::config::VerdictThresholds;
use crate::models::AnalysisResult;
use crate::normalize::normalize;
use crate::prompt::build_prompt;

/// Runs one analysis: prompt the model, then normalize its reply.
///
/// Malformed replies are absorbed by the normalizer; only failures of the
/// completion call itself are returned as errors.
pub struct Analyzer<C: CompletionClient> {
    client: C,
    thresholds: VerdictThresholds,
}

impl<C: CompletionClient> Analyzer<C> {
    pub fn new(client: C, thresholds: VerdictThresholds) -> Self {
        Self { client, thresholds }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub async fn analyze(&self, content: &str) -> VeracityResult<AnalysisResult> {
        let prompt = build_prompt(content);
        let start = Instant::now();

        let reply = self.client.complete(&prompt).await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        let result = normalize(&reply, &self.thresholds);
        tracing::info!(
            model = self.client.model(),
            content_len = content.len(),
            latency_ms,
            is_fake = result.is_fake,
            confidence = result.confidence,
            "analysis completed"
        );

        Ok(result)
    }

    /// Same as [`Analyzer::analyze`], serialized to JSON text.
    pub async fn analyze_to_json(&self, content: &str) -> VeracityResult<String> {
        let result = self.analyze(content).await?;
        serde_json::to_string(&result)
            .map_err(|e| VeracityError::Internal(format!("failed to encode analysis: {e}")))
    }
}
