//! Language policy.
//!
//! Models are probabilistic and may ignore in-prompt instructions, so
//! language conformance is enforced at three layers: a directive prepended
//! to every system prompt, a pre-send rejection of disallowed trainee input,
//! and a post-receive scan of the model's reply.  All three layers route
//! through this module so the rules cannot drift apart.

use patter_domain::{Language, Speaker};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Directives
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const LANGUAGE_DIRECTIVE_EN: &str = "\
SYSTEM LANGUAGE POLICY (STRICT):
- Output must be English ONLY. Do NOT output any Chinese characters.
- If the user speaks Chinese, reply: 'Please speak English.' and continue in English.
- Do not translate to Chinese. Do not include bilingual content.
- Keep role-play consistent: you are the customer, the user is the sales associate.";

const LANGUAGE_DIRECTIVE_ZH: &str = "\
系统语言规则（严格）：
- 输出必须为中文。
- 不要输出英文或中英混合（除非品牌/型号/专有名词）。
- 你扮演顾客，用户是销售。";

const FORMAT_DIRECTIVE_EN: &str = "\
OUTPUT FORMAT POLICY (STRICT):
- Output must be valid JSON ONLY.
- Use English strings only.
- No markdown, no code fences, no extra text.";

const FORMAT_DIRECTIVE_ZH: &str = "\
输出格式规则（严格）：
- 只能输出合法 JSON。
- 不要输出 markdown 或代码块，不要包含多余解释。";

/// Strict output-language directive prepended to every conversational
/// system prompt.
pub fn language_directive(lang: Language) -> &'static str {
    match lang {
        Language::En => LANGUAGE_DIRECTIVE_EN,
        Language::Zh => LANGUAGE_DIRECTIVE_ZH,
    }
}

/// Strict machine-parseable-JSON directive prepended to the scoring prompt.
pub fn format_directive(lang: Language) -> &'static str {
    match lang {
        Language::En => FORMAT_DIRECTIVE_EN,
        Language::Zh => FORMAT_DIRECTIVE_ZH,
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Script detection
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// True when `text` contains a script the session language forbids.
///
/// English sessions forbid any CJK codepoint; Chinese sessions allow
/// everything (proper nouns and model names are expected in Latin script).
pub fn contains_disallowed_script(text: &str, lang: Language) -> bool {
    match lang {
        Language::En => contains_cjk(text),
        Language::Zh => false,
    }
}

fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Fixed localized strings
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The customer's fixed reply when the language policy is violated.
pub fn refusal_reply() -> &'static str {
    "Please speak English."
}

/// Opening line used when the generated persona carries none, or when the
/// generated opening itself violates the language policy.
pub fn fallback_opening(lang: Language) -> &'static str {
    match lang {
        Language::En => "Hi, I'd like to take a look at your products.",
        Language::Zh => "你好，我想看看产品。",
    }
}

/// Customer reply substituted when the transport returns nothing, keeping
/// the conversation going instead of surfacing an error mid-session.
pub fn fallback_customer_reply(lang: Language) -> &'static str {
    match lang {
        Language::En => "Sorry, I didn't catch that. Could you say it again?",
        Language::Zh => "抱歉，我这边有点忙，刚刚没有听清楚，您可以再说一遍吗？",
    }
}

/// Localized speaker label used when flattening history into a transcript.
pub fn speaker_label(speaker: Speaker, lang: Language) -> &'static str {
    match (speaker, lang) {
        (Speaker::Trainee, Language::En) => "Sales",
        (Speaker::Customer, Language::En) => "Customer",
        (Speaker::Trainee, Language::Zh) => "销售",
        (Speaker::Customer, Language::Zh) => "顾客",
    }
}
