//! Evaluation response parsing.

use patter_domain::{DimensionScores, EvaluationResult};

/// Parse the scorer's reply into the fixed evaluation schema.
///
/// On any parse failure the neutral fallback score set is returned with the
/// raw text preserved as `feedback`, so the caller always has something to
/// display.  This is a safety net, not an error path.
pub fn parse_evaluation(raw: &str) -> EvaluationResult {
    serde_json::from_str::<EvaluationResult>(raw).unwrap_or_else(|_| neutral_fallback(raw))
}

fn neutral_fallback(raw: &str) -> EvaluationResult {
    EvaluationResult {
        overall_score: 70.0,
        dimensions: DimensionScores {
            needs_discovery: 60.0,
            product_knowledge: 70.0,
            objection_handling: 65.0,
            emotional_connection: 60.0,
            closing_skill: 68.0,
        },
        kb_insights: None,
        feedback: raw.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_json_parses_through() {
        let json = r#"{
            "overallScore": 88,
            "dimensions": {
                "needsDiscovery": 90,
                "productKnowledge": 85,
                "objectionHandling": 88,
                "emotionalConnection": 92,
                "closingSkill": 84
            },
            "feedback": "Excellent discovery questions."
        }"#;
        let result = parse_evaluation(json);
        assert_eq!(result.overall_score, 88.0);
        assert_eq!(result.dimensions.emotional_connection, 92.0);
        assert_eq!(result.feedback, "Excellent discovery questions.");
    }

    #[test]
    fn non_json_falls_back_to_neutral_scores() {
        let result = parse_evaluation("not json");
        assert_eq!(result.overall_score, 70.0);
        assert_eq!(result.dimensions.needs_discovery, 60.0);
        assert_eq!(result.dimensions.product_knowledge, 70.0);
        assert_eq!(result.dimensions.objection_handling, 65.0);
        assert_eq!(result.dimensions.emotional_connection, 60.0);
        assert_eq!(result.dimensions.closing_skill, 68.0);
        assert_eq!(result.feedback, "not json");
        assert!(result.kb_insights.is_none());
    }

    #[test]
    fn empty_reply_falls_back_with_empty_feedback() {
        let result = parse_evaluation("");
        assert_eq!(result.overall_score, 70.0);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn schema_violations_fall_back_too() {
        // Valid JSON, wrong shape.
        let result = parse_evaluation(r#"{"score": 99}"#);
        assert_eq!(result.overall_score, 70.0);
        assert_eq!(result.feedback, r#"{"score": 99}"#);
    }
}
