//! Secondary "behave like a real shopper" instruction.
//!
//! Sent as the request-level system prompt on every dialogue turn.  Because
//! the backend may give that slot higher effective priority than the
//! conversation's own system message, it is always re-wrapped with the
//! language directive before sending — otherwise it could override the
//! primary language rule.

use patter_domain::Language;

use crate::language::language_directive;

const CUSTOMER_REALISM_PROMPT: &str = "\
REALISM NOTES (CUSTOMER BEHAVIOR):
- Speak like a real shopper: short sentences, occasional hesitation, small talk.
- Do not volunteer all your objections at once; reveal them as the
  conversation gives you reason to.
- Ask questions a real customer would ask (price, materials, care, exchanges).
- Do not be won over by flattery alone; you respond to relevant product
  knowledge and to being listened to.
- Money matters to you exactly as much as your persona says it does.";

/// The raw realism instruction.
pub fn customer_realism_prompt() -> &'static str {
    CUSTOMER_REALISM_PROMPT
}

/// The realism instruction with the language directive re-applied on top.
pub fn wrapped_realism_prompt(lang: Language) -> String {
    format!("{}\n\n{}", language_directive(lang), CUSTOMER_REALISM_PROMPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_prompt_leads_with_the_language_directive() {
        let wrapped = wrapped_realism_prompt(Language::En);
        assert!(wrapped.starts_with("SYSTEM LANGUAGE POLICY"));
        assert!(wrapped.contains("REALISM NOTES"));

        let wrapped_zh = wrapped_realism_prompt(Language::Zh);
        assert!(wrapped_zh.starts_with("系统语言规则"));
    }
}
