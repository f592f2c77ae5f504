//! Shared domain types for Patter.
//!
//! Everything other crates agree on lives here: the common error type, the
//! session/turn/evaluation data model, provider-agnostic chat messages, and
//! the TOML configuration tree.

pub mod chat;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod session;

pub use chat::{Message, Role};
pub use error::{Error, Result};
pub use evaluation::{DimensionScores, EvaluationResult, KbInsights};
pub use session::{
    Difficulty, Language, PersonaId, ScenarioId, SessionConfig, SessionState, Speaker, Turn,
};
