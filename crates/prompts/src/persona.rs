//! Persona-generation and dialogue system prompts.

use patter_domain::{Difficulty, PersonaId, ScenarioId};

use crate::knowledge::KnowledgeSources;

/// Instruction text asking the model to author a customer persona as a JSON
/// object.  Deterministic: identical inputs yield identical text.
pub fn persona_generation_prompt(
    persona: PersonaId,
    scenario: ScenarioId,
    difficulty: Difficulty,
    knowledge: &KnowledgeSources,
) -> String {
    format!(
        "You are preparing a retail sales role-play simulation.\n\
         Create one customer persona for this training session.\n\
         \n\
         Customer archetype: {persona}\n\
         Scenario: {scenario}\n\
         Difficulty: {difficulty}\n\
         \n\
         === BRAND KNOWLEDGE ===\n\
         {brand}\n\
         \n\
         === PRODUCT LINE KNOWLEDGE ===\n\
         {product_line}\n\
         \n\
         === PRODUCT KNOWLEDGE ===\n\
         {product}\n\
         \n\
         Respond with a single JSON object and nothing else. The object must contain:\n\
         - \"name\": the customer's name\n\
         - \"background\": one paragraph of personal background fitting the {persona} archetype\n\
         - \"intent\": why they are here today, fitting the {scenario} scenario\n\
         - \"budget\": their spending range and how price-sensitive they are\n\
         - \"objections\": an array of 2 to 4 concerns they are likely to raise\n\
         - \"temperament\": how hard they are to win over at {difficulty} difficulty\n\
         - \"openingStatement\": the first thing they say when the sales associate greets them",
        persona = persona.token(),
        scenario = scenario.token(),
        difficulty = difficulty.token(),
        brand = knowledge.brand,
        product_line = knowledge.product_line,
        product = knowledge.product,
    )
}

/// Dialogue system prompt for the conversation phase.
///
/// Embeds the generated persona verbatim so the customer stays consistent
/// turn-to-turn, and defines the end-of-reply intent tag protocol.
pub fn dialogue_system_prompt(
    persona_details: &str,
    scenario: ScenarioId,
    difficulty: Difficulty,
    knowledge: &KnowledgeSources,
) -> String {
    format!(
        "You are role-playing a retail customer in a sales training simulation.\n\
         The user is the sales associate. Stay in character for the whole conversation.\n\
         \n\
         === CUSTOMER PERSONA ===\n\
         {persona_details}\n\
         \n\
         Scenario: {scenario}\n\
         Difficulty: {difficulty}\n\
         \n\
         === BRAND KNOWLEDGE ===\n\
         {brand}\n\
         \n\
         === PRODUCT LINE KNOWLEDGE ===\n\
         {product_line}\n\
         \n\
         === PRODUCT KNOWLEDGE ===\n\
         {product}\n\
         \n\
         Rules:\n\
         - Never break character, and never mention being an AI or a simulation.\n\
         - React the way this persona would: raise their objections, hold their budget,\n\
           and only warm up when the associate earns it.\n\
         - End every reply with exactly one tag on its own at the end of the text:\n\
           [PURCHASE] if you have just decided to buy,\n\
           [LEAVE] if you have decided to walk out without buying,\n\
           [CONTINUE] in every other case.",
        persona_details = persona_details,
        scenario = scenario.token(),
        difficulty = difficulty.token(),
        brand = knowledge.brand,
        product_line = knowledge.product_line,
        product = knowledge.product,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knowledge() -> KnowledgeSources {
        KnowledgeSources {
            brand: "brand facts".into(),
            product_line: "line facts".into(),
            product: "product facts".into(),
        }
    }

    #[test]
    fn persona_prompt_embeds_catalogue_tokens_verbatim() {
        let prompt = persona_generation_prompt(
            PersonaId::PriceSensitive,
            ScenarioId::FirstVisit,
            Difficulty::Basic,
            &knowledge(),
        );
        assert!(prompt.contains("PRICE_SENSITIVE"));
        assert!(prompt.contains("FIRST_VISIT"));
        assert!(prompt.contains("BASIC"));
        assert!(prompt.contains("openingStatement"));
        assert!(prompt.contains("brand facts"));
    }

    #[test]
    fn persona_prompt_is_deterministic() {
        let a = persona_generation_prompt(
            PersonaId::Tourist,
            ScenarioId::DutyFree,
            Difficulty::Advanced,
            &knowledge(),
        );
        let b = persona_generation_prompt(
            PersonaId::Tourist,
            ScenarioId::DutyFree,
            Difficulty::Advanced,
            &knowledge(),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn dialogue_prompt_embeds_persona_verbatim_and_all_tags() {
        let persona = "{\n  \"name\": \"Wei Lin\",\n  \"budget\": \"2000 EUR\"\n}";
        let prompt = dialogue_system_prompt(
            persona,
            ScenarioId::VipReturn,
            Difficulty::Intermediate,
            &knowledge(),
        );
        assert!(prompt.contains(persona));
        assert!(prompt.contains("[PURCHASE]"));
        assert!(prompt.contains("[LEAVE]"));
        assert!(prompt.contains("[CONTINUE]"));
        assert!(prompt.contains("VIP_RETURN"));
    }
}
