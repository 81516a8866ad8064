/// Score cut-offs used to derive `is_fake` when the model omits a verdict.
/// Any single breached threshold marks the content as fake.
#[derive(Debug, Clone)]
pub struct VerdictThresholds {
    pub min_confidence: i64,
    pub min_credibility: i64,
    pub min_objectivity: i64,
    pub max_emotional_manipulation: i64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            min_confidence: 50,
            min_credibility: 40,
            min_objectivity: 40,
            max_emotional_manipulation: 70,
        }
    }
}
