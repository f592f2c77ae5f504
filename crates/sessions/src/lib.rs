//! Session orchestration for Patter.
//!
//! Owns session identity, the append-only conversation history, the
//! `Active -> {Purchased, Left} -> Ended` state machine, and the three-layer
//! language enforcement around every exchange with the model.

pub mod orchestrator;
pub mod session;
pub mod transcript;

pub use orchestrator::{Orchestrator, TurnOutcome};
pub use patter_parser::TurnSignal;
pub use session::Session;
