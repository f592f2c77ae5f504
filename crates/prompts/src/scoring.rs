//! Scoring prompts: the rubric system prompt and the per-session user
//! prompt wrapping the flattened transcript.

/// Fixed rubric and JSON schema for the evaluator.
pub fn scoring_system_prompt() -> &'static str {
    "You are a retail sales training evaluator. You will be given the full \
     transcript of a role-play session between a sales associate and a \
     simulated customer. Score the sales associate.\n\
     \n\
     Respond with a single JSON object and nothing else, using exactly this schema:\n\
     {\n\
       \"overallScore\": <number 0-100>,\n\
       \"dimensions\": {\n\
         \"needsDiscovery\": <number 0-100>,\n\
         \"productKnowledge\": <number 0-100>,\n\
         \"objectionHandling\": <number 0-100>,\n\
         \"emotionalConnection\": <number 0-100>,\n\
         \"closingSkill\": <number 0-100>\n\
       },\n\
       \"kbInsights\": {\n\
         \"usedKnowledgeItems\": [<product or brand facts the associate used correctly>],\n\
         \"missingTopics\": [<facts they should have used but did not>]\n\
       },\n\
       \"feedback\": \"<three to five sentences of concrete coaching feedback>\"\n\
     }"
}

/// User prompt carrying the flattened `speaker: text` transcript.
pub fn scoring_prompt(transcript: &str) -> String {
    format!(
        "Here is the full transcript of the training session:\n\n{transcript}\n\n\
         Score the sales associate now."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_names_every_dimension() {
        let prompt = scoring_system_prompt();
        for key in [
            "overallScore",
            "needsDiscovery",
            "productKnowledge",
            "objectionHandling",
            "emotionalConnection",
            "closingSkill",
            "feedback",
        ] {
            assert!(prompt.contains(key), "missing {key}");
        }
    }

    #[test]
    fn user_prompt_wraps_the_transcript_verbatim() {
        let transcript = "Sales: hello\nCustomer: hi";
        let prompt = scoring_prompt(transcript);
        assert!(prompt.contains(transcript));
    }
}
