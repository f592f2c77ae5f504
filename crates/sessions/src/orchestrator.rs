//! The session orchestrator.
//!
//! Coordinates session start → turn exchange → termination → evaluation.
//! Language conformance is enforced three times per turn: the directive
//! baked into every system prompt, a pre-send rejection of disallowed
//! trainee input, and a post-receive scan of the model's reply.  All three
//! layers are required; the model is free to ignore any one of them.

use std::sync::Arc;

use parking_lot::Mutex;

use patter_domain::{
    Error, EvaluationResult, Message, Result, SessionConfig, SessionState,
};
use patter_parser::{parse_dialogue_reply, parse_evaluation, parse_persona_reply, TurnSignal};
use patter_prompts::{
    contains_disallowed_script, dialogue_system_prompt, fallback_customer_reply,
    fallback_opening, format_directive, language_directive, persona_generation_prompt,
    refusal_reply, scoring_prompt, scoring_system_prompt, wrapped_realism_prompt,
    KnowledgeSources,
};
use patter_transport::{ChatRequest, Transport};

use crate::session::Session;
use crate::transcript;

/// Outcome of one completed turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// The customer's reply, intent tag stripped.
    pub reply: String,
    /// What the reply signals; on `Purchased`/`Left` the caller should
    /// schedule [`Orchestrator::end_session`].
    pub signal: TurnSignal,
}

/// Coordinates one training session at a time against a [`Transport`].
pub struct Orchestrator {
    transport: Arc<dyn Transport>,
    knowledge: KnowledgeSources,
    active: Mutex<Option<Arc<Session>>>,
}

impl Orchestrator {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_knowledge(transport, KnowledgeSources::default())
    }

    pub fn with_knowledge(transport: Arc<dyn Transport>, knowledge: KnowledgeSources) -> Self {
        Self { transport, knowledge, active: Mutex::new(None) }
    }

    /// The session currently owned by this orchestrator, if any.
    pub fn active_session(&self) -> Option<Arc<Session>> {
        self.active.lock().clone()
    }

    /// Drop the active session.
    pub fn reset(&self) {
        if let Some(session) = self.active.lock().take() {
            tracing::info!(session_id = session.id(), "session reset");
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Start
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Generate the persona and open the session.
    ///
    /// Fails with [`Error::PersonaGeneration`] when the transport returns no
    /// content — there is no session without a persona, so this one start-up
    /// failure propagates instead of falling back.
    pub async fn start_session(&self, config: SessionConfig) -> Result<Arc<Session>> {
        config.validate()?;
        let lang = config.language;

        let persona_prompt = persona_generation_prompt(
            config.persona,
            config.scenario,
            config.difficulty,
            &self.knowledge,
        );
        let system = format!("{}\n\n{}", language_directive(lang), persona_prompt);

        // Persona generation is a standalone call: one system message, no
        // history.
        let raw = self
            .transport
            .chat_complete(ChatRequest {
                messages: vec![Message::system(system)],
                system_prompt: None,
                temperature: None,
            })
            .await;

        if raw.trim().is_empty() {
            return Err(Error::PersonaGeneration(
                "transport returned no persona content".into(),
            ));
        }

        let persona = parse_persona_reply(&raw);

        // The generated opening must itself obey the language policy.
        let opening = match persona.opening {
            Some(ref opening) if !contains_disallowed_script(opening, lang) => opening.clone(),
            _ => fallback_opening(lang).to_owned(),
        };

        let dialogue = dialogue_system_prompt(
            &persona.details,
            config.scenario,
            config.difficulty,
            &self.knowledge,
        );
        let dialogue = format!("{}\n\n{}", language_directive(lang), dialogue);

        let session = Arc::new(Session::new(config, persona.details, dialogue, opening));
        tracing::info!(
            session_id = session.id(),
            persona = %session.config().persona,
            scenario = %session.config().scenario,
            lang = %lang,
            "session started"
        );

        *self.active.lock() = Some(session.clone());
        Ok(session)
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Turn exchange
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Exchange one turn with the simulated customer.
    ///
    /// Every completed turn appends exactly two history entries (trainee,
    /// then customer).  Transport failures and language violations are
    /// absorbed into fixed replies — mid-conversation, continuity beats
    /// error surfacing.
    pub async fn send_turn(&self, session: &Session, trainee_text: &str) -> Result<TurnOutcome> {
        let text = trainee_text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput("trainee message is empty".into()));
        }

        let _turn = session.lock_turn().await;

        let state = session.state();
        if state.is_terminal() {
            return Err(Error::SessionState(format!(
                "cannot send a turn to a session in state '{state}'"
            )));
        }

        let lang = session.config().language;

        // Pre-send guard: a known-bad input never earns a network round trip.
        if contains_disallowed_script(text, lang) {
            tracing::debug!(session_id = session.id(), "disallowed script in trainee input");
            let reply = refusal_reply().to_owned();
            session.push_exchange(text, &reply);
            return Ok(TurnOutcome { reply, signal: TurnSignal::Normal });
        }

        let mut messages = vec![Message::system(session.dialogue_prompt())];
        for turn in session.history() {
            messages.push(Message { role: turn.speaker.role(), content: turn.text });
        }
        messages.push(Message::user(text));

        let raw = self
            .transport
            .chat_complete(ChatRequest {
                messages,
                system_prompt: Some(wrapped_realism_prompt(lang)),
                temperature: None,
            })
            .await;

        if raw.trim().is_empty() {
            tracing::warn!(session_id = session.id(), "no reply from transport, using fallback");
            let reply = fallback_customer_reply(lang).to_owned();
            session.push_exchange(text, &reply);
            return Ok(TurnOutcome { reply, signal: TurnSignal::Normal });
        }

        // Post-receive guard: the model may have ignored the directive.
        if contains_disallowed_script(&raw, lang) {
            tracing::warn!(session_id = session.id(), "model reply violated language policy");
            let reply = refusal_reply().to_owned();
            session.push_exchange(text, &reply);
            return Ok(TurnOutcome { reply, signal: TurnSignal::Normal });
        }

        let parsed = parse_dialogue_reply(&raw);
        session.push_exchange(text, &parsed.text);

        match parsed.signal {
            TurnSignal::Purchased => {
                session.set_state(SessionState::Purchased);
                tracing::info!(session_id = session.id(), "customer purchased");
            }
            TurnSignal::Left => {
                session.set_state(SessionState::Left);
                tracing::info!(session_id = session.id(), "customer left");
            }
            TurnSignal::Normal => {}
        }

        Ok(TurnOutcome { reply: parsed.text, signal: parsed.signal })
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Evaluation
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Score the session and transition it to `Ended`.
    ///
    /// Valid from `Active` (trainee ended early) and from `Purchased`/`Left`;
    /// an already-`Ended` session is rejected.
    pub async fn end_session(&self, session: &Session) -> Result<EvaluationResult> {
        let _turn = session.lock_turn().await;

        if session.state() == SessionState::Ended {
            return Err(Error::SessionState("session already ended".into()));
        }

        let lang = session.config().language;
        let flattened = transcript::flatten(&session.history(), lang);

        let system = format!("{}\n\n{}", format_directive(lang), scoring_system_prompt());
        let raw = self
            .transport
            .chat_complete(ChatRequest {
                messages: vec![Message::system(system), Message::user(scoring_prompt(&flattened))],
                system_prompt: None,
                temperature: None,
            })
            .await;

        // Malformed or missing score text falls back to the neutral score
        // set; the trainee always gets a displayable result.
        let result = parse_evaluation(&raw);
        session.set_state(SessionState::Ended);
        tracing::info!(
            session_id = session.id(),
            overall = result.overall_score,
            "session ended"
        );

        Ok(result)
    }
}
