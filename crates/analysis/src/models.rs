use serde::{Deserialize, Serialize};

pub const FALLBACK_ANALYSIS: &str = "Error processing the content. Please try again.";
pub const FALLBACK_INDICATOR: &str = "Error in analysis";
pub const FALLBACK_RECOMMENDATION: &str = "Please try again with different content";
pub const UNKNOWN_BIAS: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCheck {
    pub mentioned_sources: Vec<String>,
    pub verifiable_claims: Vec<String>,
    pub credibility_score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasAnalysis {
    pub political_bias: String,
    pub emotional_manipulation_score: i64,
    pub objectivity_score: i64,
}

/// Normalized verdict returned to the caller. All scores are on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub is_fake: bool,
    pub confidence: i64,
    pub analysis: String,
    pub key_indicators: Vec<String>,
    pub source_check: SourceCheck,
    pub bias_analysis: BiasAnalysis,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Most cautious verdict, used when the model reply cannot be read.
    pub fn fallback() -> Self {
        Self {
            is_fake: true,
            confidence: 0,
            analysis: FALLBACK_ANALYSIS.to_string(),
            key_indicators: vec![FALLBACK_INDICATOR.to_string()],
            source_check: SourceCheck {
                mentioned_sources: vec![],
                verifiable_claims: vec![],
                credibility_score: 0,
            },
            bias_analysis: BiasAnalysis {
                political_bias: UNKNOWN_BIAS.to_string(),
                emotional_manipulation_score: 100,
                objectivity_score: 0,
            },
            recommendations: vec![FALLBACK_RECOMMENDATION.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_serializes_in_declared_field_order() {
        let json = serde_json::to_string(&AnalysisResult::fallback()).unwrap();
        let keys = [
            "\"is_fake\"",
            "\"confidence\"",
            "\"analysis\"",
            "\"key_indicators\"",
            "\"source_check\"",
            "\"bias_analysis\"",
            "\"recommendations\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn fallback_is_maximally_cautious() {
        let result = AnalysisResult::fallback();
        assert!(result.is_fake);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.source_check.credibility_score, 0);
        assert_eq!(result.bias_analysis.emotional_manipulation_score, 100);
        assert_eq!(result.bias_analysis.objectivity_score, 0);
        assert_eq!(result.bias_analysis.political_bias, "Unknown");
        assert_eq!(
            result.recommendations,
            vec!["Please try again with different content"]
        );
    }
}
