//! Flattening history into the transcript the scorer reads.

use patter_domain::{Language, Turn};
use patter_prompts::speaker_label;

/// Flatten the conversation into localized `speaker: text` lines, one per
/// turn, in session order.
pub fn flatten(history: &[Turn], lang: Language) -> String {
    history
        .iter()
        .map(|turn| format!("{}: {}", speaker_label(turn.speaker, lang), turn.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use patter_domain::Speaker;

    fn history() -> Vec<Turn> {
        vec![
            Turn::now(Speaker::Customer, "你们的新款到了吗？"),
            Turn::now(Speaker::Trainee, "到了，这边请。"),
            Turn::now(Speaker::Customer, "太贵了。"),
        ]
    }

    #[test]
    fn chinese_labels() {
        let transcript = flatten(&history(), Language::Zh);
        assert_eq!(transcript, "顾客: 你们的新款到了吗？\n销售: 到了，这边请。\n顾客: 太贵了。");
    }

    #[test]
    fn english_labels_preserve_order() {
        let history = vec![
            Turn::now(Speaker::Customer, "Just browsing."),
            Turn::now(Speaker::Trainee, "Take your time."),
        ];
        let transcript = flatten(&history, Language::En);
        assert_eq!(transcript, "Customer: Just browsing.\nSales: Take your time.");
    }

    #[test]
    fn empty_history_is_empty_transcript() {
        assert_eq!(flatten(&[], Language::En), "");
    }
}
