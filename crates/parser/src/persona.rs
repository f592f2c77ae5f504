//! Persona-generation response parsing.

/// Result of parsing the persona-generation reply.
///
/// On a successful structured parse, `details` is the whole object
/// pretty-printed (so later prompts embed a normalized form) and `opening`
/// is the extracted `openingStatement`.  On failure, `details` is the raw
/// text unchanged and `opening` is `None` — the caller substitutes the
/// per-language fallback opening line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaReply {
    pub details: String,
    pub opening: Option<String>,
}

/// Parse a persona reply, tolerating a fenced code block around the JSON.
pub fn parse_persona_reply(raw: &str) -> PersonaReply {
    let cleaned = strip_code_fence(raw);

    match serde_json::from_str::<serde_json::Value>(cleaned) {
        Ok(value) => {
            let opening = value
                .get("openingStatement")
                .and_then(|v| v.as_str())
                .map(String::from);
            let details = serde_json::to_string_pretty(&value)
                .unwrap_or_else(|_| cleaned.to_owned());
            PersonaReply { details, opening }
        }
        Err(_) => PersonaReply { details: raw.to_owned(), opening: None },
    }
}

/// Strip one surrounding ```lang fence, if present.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSONA_JSON: &str = r#"{
        "name": "Margaux",
        "background": "Visiting from Lyon.",
        "openingStatement": "Bonjour, just browsing for now."
    }"#;

    #[test]
    fn plain_json_extracts_opening_and_pretty_prints() {
        let reply = parse_persona_reply(PERSONA_JSON);
        assert_eq!(reply.opening.as_deref(), Some("Bonjour, just browsing for now."));
        // Pretty-printed re-serialization, not the raw input.
        assert!(reply.details.contains("\"name\": \"Margaux\""));
        serde_json::from_str::<serde_json::Value>(&reply.details).unwrap();
    }

    #[test]
    fn fenced_json_is_unwrapped() {
        let fenced = format!("```json\n{PERSONA_JSON}\n```");
        let reply = parse_persona_reply(&fenced);
        assert_eq!(reply.opening.as_deref(), Some("Bonjour, just browsing for now."));
    }

    #[test]
    fn bare_fence_without_language_is_unwrapped() {
        let fenced = format!("```\n{PERSONA_JSON}\n```");
        let reply = parse_persona_reply(&fenced);
        assert!(reply.opening.is_some());
    }

    #[test]
    fn malformed_json_passes_through_raw() {
        let raw = "I am a hesitant customer named Zhang Wei.";
        let reply = parse_persona_reply(raw);
        assert_eq!(reply.details, raw);
        assert_eq!(reply.opening, None);
    }

    #[test]
    fn missing_opening_statement_yields_none() {
        let reply = parse_persona_reply(r#"{"name": "Ana"}"#);
        assert!(reply.opening.is_none());
        assert!(reply.details.contains("Ana"));
    }

    #[test]
    fn reparse_of_pretty_printed_details_is_idempotent() {
        let first = parse_persona_reply(PERSONA_JSON);
        let second = parse_persona_reply(&first.details);
        assert_eq!(first, second);
    }
}
