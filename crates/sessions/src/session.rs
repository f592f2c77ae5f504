//! The live session object.
//!
//! A session is created by the orchestrator and handed to the caller as an
//! `Arc`; the caller reads snapshots, the orchestrator mutates.  History is
//! append-only and its insertion order is the conversation order — it is
//! replayed verbatim as model context and flattened in the same order for
//! scoring.

use chrono::Utc;
use parking_lot::RwLock;

use patter_domain::{SessionConfig, SessionState, Speaker, Turn};

/// One training session.
#[derive(Debug)]
pub struct Session {
    session_id: String,
    config: SessionConfig,
    persona_details: String,
    dialogue_prompt: String,
    inner: RwLock<SessionInner>,
    /// Held across the whole network round trip of a turn, so a second turn
    /// cannot start against a stale history.
    turn_gate: tokio::sync::Mutex<()>,
}

#[derive(Debug)]
struct SessionInner {
    history: Vec<Turn>,
    state: SessionState,
}

impl Session {
    pub(crate) fn new(
        config: SessionConfig,
        persona_details: String,
        dialogue_prompt: String,
        opening: String,
    ) -> Self {
        Self {
            session_id: mint_session_id(),
            config,
            persona_details,
            dialogue_prompt,
            inner: RwLock::new(SessionInner {
                history: vec![Turn::now(Speaker::Customer, opening)],
                state: SessionState::Active,
            }),
            turn_gate: tokio::sync::Mutex::new(()),
        }
    }

    pub fn id(&self) -> &str {
        &self.session_id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The generated persona, pretty-printed JSON or raw model text.
    pub fn persona_details(&self) -> &str {
        &self.persona_details
    }

    /// The language-wrapped dialogue system prompt fixed at session start.
    pub fn dialogue_prompt(&self) -> &str {
        &self.dialogue_prompt
    }

    pub fn state(&self) -> SessionState {
        self.inner.read().state
    }

    /// Cloned snapshot of the conversation so far, in order.
    pub fn history(&self) -> Vec<Turn> {
        self.inner.read().history.clone()
    }

    pub(crate) async fn lock_turn(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.turn_gate.lock().await
    }

    /// Append a completed exchange: the trainee turn first, then the
    /// customer turn.
    pub(crate) fn push_exchange(&self, trainee_text: &str, customer_text: &str) {
        let mut inner = self.inner.write();
        inner.history.push(Turn::now(Speaker::Trainee, trainee_text));
        inner.history.push(Turn::now(Speaker::Customer, customer_text));
    }

    pub(crate) fn set_state(&self, next: SessionState) {
        self.inner.write().state = next;
    }
}

/// Opaque, time-derived session token.
fn mint_session_id() -> String {
    format!("sess_{}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patter_domain::{Difficulty, Language, PersonaId, ScenarioId};

    fn config() -> SessionConfig {
        SessionConfig {
            persona: PersonaId::Hesitant,
            scenario: ScenarioId::FirstVisit,
            difficulty: Difficulty::Basic,
            brand: "Gucci".into(),
            language: Language::Zh,
        }
    }

    #[test]
    fn new_session_opens_with_one_customer_turn() {
        let session = Session::new(config(), "{}".into(), "prompt".into(), "你好".into());
        let history = session.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].speaker, Speaker::Customer);
        assert_eq!(history[0].text, "你好");
        assert_eq!(session.state(), SessionState::Active);
        assert!(session.id().starts_with("sess_"));
    }

    #[test]
    fn exchanges_append_in_trainee_then_customer_order() {
        let session = Session::new(config(), "{}".into(), "prompt".into(), "opening".into());
        session.push_exchange("first question", "first answer");
        session.push_exchange("second question", "second answer");

        let history = session.history();
        assert_eq!(history.len(), 5);
        assert_eq!(history[1].speaker, Speaker::Trainee);
        assert_eq!(history[1].text, "first question");
        assert_eq!(history[2].speaker, Speaker::Customer);
        assert_eq!(history[4].text, "second answer");
    }
}
