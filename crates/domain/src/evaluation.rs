//! Structured evaluation returned after a session terminates.
//!
//! The wire format is the camelCase JSON object the scoring prompt instructs
//! the model to emit.  Scores are plain numbers on a 0-100 scale.

use serde::{Deserialize, Serialize};

/// Rubric evaluation for one completed session.  Created once at
/// termination and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub overall_score: f64,
    pub dimensions: DimensionScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kb_insights: Option<KbInsights>,
    #[serde(default)]
    pub feedback: String,
}

/// The five fixed scoring dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub needs_discovery: f64,
    pub product_knowledge: f64,
    pub objection_handling: f64,
    pub emotional_connection: f64,
    pub closing_skill: f64,
}

/// Optional knowledge-base usage insights the scorer may include.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct KbInsights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_knowledge_items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_topics: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_wire_format() {
        let json = r#"{
            "overallScore": 82,
            "dimensions": {
                "needsDiscovery": 80,
                "productKnowledge": 85,
                "objectionHandling": 78,
                "emotionalConnection": 84,
                "closingSkill": 81
            },
            "feedback": "Strong needs discovery; close earlier."
        }"#;
        let result: EvaluationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.overall_score, 82.0);
        assert_eq!(result.dimensions.product_knowledge, 85.0);
        assert!(result.kb_insights.is_none());
    }

    #[test]
    fn kb_insights_are_optional_and_partial() {
        let json = r#"{
            "overallScore": 70,
            "dimensions": {
                "needsDiscovery": 60,
                "productKnowledge": 70,
                "objectionHandling": 65,
                "emotionalConnection": 60,
                "closingSkill": 68
            },
            "kbInsights": { "missingTopics": ["after-sales care"] },
            "feedback": ""
        }"#;
        let result: EvaluationResult = serde_json::from_str(json).unwrap();
        let kb = result.kb_insights.unwrap();
        assert!(kb.used_knowledge_items.is_none());
        assert_eq!(kb.missing_topics.unwrap(), vec!["after-sales care"]);
    }

    #[test]
    fn missing_feedback_defaults_to_empty() {
        let json = r#"{
            "overallScore": 75,
            "dimensions": {
                "needsDiscovery": 70,
                "productKnowledge": 75,
                "objectionHandling": 72,
                "emotionalConnection": 74,
                "closingSkill": 76
            }
        }"#;
        let result: EvaluationResult = serde_json::from_str(json).unwrap();
        assert!(result.feedback.is_empty());
    }
}
