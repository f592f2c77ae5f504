//! Intent-tag decoding for customer replies.

/// What the customer's reply signals about the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSignal {
    /// The customer decided to buy; the session should end.
    Purchased,
    /// The customer walked out; the session should end.
    Left,
    /// The conversation continues.
    Normal,
}

/// A customer reply with its intent tag stripped and decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueReply {
    pub text: String,
    pub signal: TurnSignal,
}

const TAG_PURCHASE: &str = "[PURCHASE]";
const TAG_LEAVE: &str = "[LEAVE]";
const TAG_CONTINUE: &str = "[CONTINUE]";

/// Decode the intent tag from a raw customer reply.
///
/// Tags are checked in a fixed order — PURCHASE, then LEAVE, then CONTINUE —
/// and the first match wins.  A reply carrying several tags is undefined
/// model behavior; the precedence is pinned so it at least stays stable.
/// Tagless replies pass through unchanged as `Normal`.
pub fn parse_dialogue_reply(raw: &str) -> DialogueReply {
    if raw.contains(TAG_PURCHASE) {
        DialogueReply { text: strip_tag(raw, TAG_PURCHASE), signal: TurnSignal::Purchased }
    } else if raw.contains(TAG_LEAVE) {
        DialogueReply { text: strip_tag(raw, TAG_LEAVE), signal: TurnSignal::Left }
    } else if raw.contains(TAG_CONTINUE) {
        DialogueReply { text: strip_tag(raw, TAG_CONTINUE), signal: TurnSignal::Normal }
    } else {
        DialogueReply { text: raw.to_owned(), signal: TurnSignal::Normal }
    }
}

/// Remove the first occurrence of `tag` and trim the result.
fn strip_tag(raw: &str, tag: &str) -> String {
    raw.replacen(tag, "", 1).trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_tag_terminates() {
        let reply = parse_dialogue_reply("I love it! [PURCHASE]");
        assert_eq!(reply.text, "I love it!");
        assert_eq!(reply.signal, TurnSignal::Purchased);
    }

    #[test]
    fn leave_tag_terminates() {
        let reply = parse_dialogue_reply("This is not for me. [LEAVE]");
        assert_eq!(reply.text, "This is not for me.");
        assert_eq!(reply.signal, TurnSignal::Left);
    }

    #[test]
    fn continue_tag_is_stripped_but_normal() {
        let reply = parse_dialogue_reply("Let me think. [CONTINUE]");
        assert_eq!(reply.text, "Let me think.");
        assert_eq!(reply.signal, TurnSignal::Normal);
    }

    #[test]
    fn tagless_reply_passes_through_unchanged() {
        let reply = parse_dialogue_reply("  Hmm, do you have it in black?  ");
        assert_eq!(reply.text, "  Hmm, do you have it in black?  ");
        assert_eq!(reply.signal, TurnSignal::Normal);
    }

    #[test]
    fn multiple_tags_resolve_by_fixed_precedence() {
        // Undefined model behavior; PURCHASE wins by check order.
        let reply = parse_dialogue_reply("Fine, I'll take it. [LEAVE] [PURCHASE]");
        assert_eq!(reply.signal, TurnSignal::Purchased);
        assert_eq!(reply.text, "Fine, I'll take it. [LEAVE]");

        let reply = parse_dialogue_reply("Goodbye. [LEAVE] [CONTINUE]");
        assert_eq!(reply.signal, TurnSignal::Left);
    }

    #[test]
    fn only_first_occurrence_is_stripped() {
        let reply = parse_dialogue_reply("Deal. [PURCHASE] [PURCHASE]");
        assert_eq!(reply.text, "Deal.  [PURCHASE]");
        assert_eq!(reply.signal, TurnSignal::Purchased);
    }
}
