//! Decoding of unstructured model output into typed results.
//!
//! Malformed output is modeled as data, never as an error: persona text
//! falls back to raw passthrough, evaluations fall back to a neutral score
//! set.  The bracket-tag convention for customer intent exists only on the
//! wire; it is decoded into an enum here and nowhere else.

pub mod dialogue;
pub mod evaluation;
pub mod persona;

pub use dialogue::{parse_dialogue_reply, DialogueReply, TurnSignal};
pub use evaluation::parse_evaluation;
pub use persona::{parse_persona_reply, PersonaReply};
