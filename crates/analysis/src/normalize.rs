//! Turns the model's free-form reply into an [`AnalysisResult`].
//!
//! The reply is expected to be JSON, often wrapped in Markdown code fences.
//! Anything that cannot be read as a JSON object degrades to
//! [`AnalysisResult::fallback`] instead of failing the request.

use serde_json::{Map, Value};

use crate::config::VerdictThresholds;
use crate::models::{AnalysisResult, BiasAnalysis, SourceCheck, UNKNOWN_BIAS};

/// The four numeric fields after unit coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub confidence: i64,
    pub credibility_score: i64,
    pub objectivity_score: i64,
    pub emotional_manipulation_score: i64,
}

/// Remove Markdown code fence markers and surrounding whitespace.
pub fn sanitize_model_output(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Bring a score onto the 0-100 scale.
///
/// Values `<= 1` are read as fractions (`0.8` is 80), larger values are
/// truncated as-is. A literal `1` therefore becomes 100. Missing and
/// non-numeric values score 0, negatives floor at 0, and nothing is
/// clamped above 100.
pub fn coerce_score(value: Option<&Value>) -> i64 {
    let Some(n) = value.and_then(Value::as_f64) else {
        return 0;
    };

    let scaled = if n <= 1.0 {
        (n * 100.0).round()
    } else {
        n.trunc()
    };

    (scaled as i64).max(0)
}

/// Derive a verdict from the scores when the model gave none.
pub fn infer_is_fake(scores: &ScoreCard, thresholds: &VerdictThresholds) -> bool {
    scores.confidence < thresholds.min_confidence
        || scores.credibility_score < thresholds.min_credibility
        || scores.objectivity_score < thresholds.min_objectivity
        || scores.emotional_manipulation_score > thresholds.max_emotional_manipulation
}

/// Full normalization pipeline: sanitize, parse, coerce, infer.
pub fn normalize(raw: &str, thresholds: &VerdictThresholds) -> AnalysisResult {
    let cleaned = sanitize_model_output(raw);

    let parsed: Value = match serde_json::from_str(&cleaned) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(
                error = %e,
                reply_len = raw.len(),
                "model reply is not valid JSON, using fallback verdict"
            );
            return AnalysisResult::fallback();
        }
    };

    match parsed {
        Value::Object(fields) => from_fields(&fields, thresholds),
        other => {
            tracing::warn!(
                kind = json_kind(&other),
                reply_len = raw.len(),
                "model reply is not a JSON object, using fallback verdict"
            );
            AnalysisResult::fallback()
        }
    }
}

fn from_fields(fields: &Map<String, Value>, thresholds: &VerdictThresholds) -> AnalysisResult {
    let empty = Map::new();
    let source = fields
        .get("source_check")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let bias = fields
        .get("bias_analysis")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let scores = ScoreCard {
        confidence: coerce_score(fields.get("confidence")),
        credibility_score: coerce_score(source.get("credibility_score")),
        objectivity_score: coerce_score(bias.get("objectivity_score")),
        emotional_manipulation_score: coerce_score(bias.get("emotional_manipulation_score")),
    };

    let is_fake = match fields.get("is_fake") {
        Some(Value::Bool(verdict)) => *verdict,
        _ => infer_is_fake(&scores, thresholds),
    };

    AnalysisResult {
        is_fake,
        confidence: scores.confidence,
        analysis: string_field(fields.get("analysis"), ""),
        key_indicators: string_list(fields.get("key_indicators")),
        source_check: SourceCheck {
            mentioned_sources: string_list(source.get("mentioned_sources")),
            verifiable_claims: string_list(source.get("verifiable_claims")),
            credibility_score: scores.credibility_score,
        },
        bias_analysis: BiasAnalysis {
            political_bias: string_field(bias.get("political_bias"), UNKNOWN_BIAS),
            emotional_manipulation_score: scores.emotional_manipulation_score,
            objectivity_score: scores.objectivity_score,
        },
        recommendations: string_list(fields.get("recommendations")),
    }
}

fn string_field(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
