//! Fixed fact-checking prompt sent to the model for every analysis.

const INSTRUCTIONS: &str = "\
You are an expert fact-checker and news analyst. Analyze the following news content for authenticity.

Analyze using these key factors:
1. Language Analysis:
   - Check for sensationalist language
   - Identify emotional manipulation
   - Look for grammatical/spelling errors
2. Source Credibility:
   - Extract mentioned sources
   - Look for verifiable claims
   - Check for expert citations
3. Content Analysis:
   - Identify potential bias
   - Check logical consistency
   - Look for missing context
4. Red Flags:
   - Check for clickbait elements
   - Identify unsupported claims
   - Look for manipulated statistics

News content: ";

const OUTPUT_SCHEMA: &str = r#"

Provide a detailed analysis in this JSON format:
{
    "is_fake": boolean,
    "confidence": number,
    "analysis": string,
    "key_indicators": [string],
    "source_check": {
        "mentioned_sources": [string],
        "verifiable_claims": [string],
        "credibility_score": number
    },
    "bias_analysis": {
        "political_bias": string,
        "emotional_manipulation_score": number,
        "objectivity_score": number
    },
    "recommendations": [string]
}
"#;

/// Render the analysis prompt around `content`. The content is embedded verbatim.
pub fn build_prompt(content: &str) -> String {
    let mut prompt =
        String::with_capacity(INSTRUCTIONS.len() + content.len() + OUTPUT_SCHEMA.len());
    prompt.push_str(INSTRUCTIONS);
    prompt.push_str(content);
    prompt.push_str(OUTPUT_SCHEMA);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_content_verbatim() {
        let content = "Breaking: {braces} and \"quotes\" survive\nacross lines";
        let prompt = build_prompt(content);
        assert!(prompt.contains(&format!("News content: {content}")));
    }

    #[test]
    fn contains_all_factor_checklists() {
        let prompt = build_prompt("x");
        for heading in [
            "1. Language Analysis:",
            "2. Source Credibility:",
            "3. Content Analysis:",
            "4. Red Flags:",
        ] {
            assert!(prompt.contains(heading), "missing {heading}");
        }
        assert!(prompt.starts_with("You are an expert fact-checker"));
    }

    #[test]
    fn describes_every_output_field() {
        let prompt = build_prompt("x");
        for field in [
            "\"is_fake\"",
            "\"confidence\"",
            "\"key_indicators\"",
            "\"mentioned_sources\"",
            "\"verifiable_claims\"",
            "\"credibility_score\"",
            "\"political_bias\"",
            "\"emotional_manipulation_score\"",
            "\"objectivity_score\"",
            "\"recommendations\"",
        ] {
            assert!(prompt.contains(field), "missing {field}");
        }
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(build_prompt("same input"), build_prompt("same input"));
    }

    #[test]
    fn non_ascii_content_is_kept() {
        let prompt = build_prompt("Новости: 月は チーズ 🧀");
        assert!(prompt.contains("Новости: 月は チーズ 🧀"));
    }
}
