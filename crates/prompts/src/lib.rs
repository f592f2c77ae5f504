//! Prompt assembly for Patter.
//!
//! Everything in this crate is a pure function: identical inputs always
//! produce identical prompt text, and nothing here performs I/O.  The
//! orchestrator composes these builders with the language policy before
//! anything goes over the wire.

pub mod knowledge;
pub mod language;
pub mod persona;
pub mod realism;
pub mod scoring;

pub use knowledge::KnowledgeSources;
pub use language::{
    contains_disallowed_script, fallback_customer_reply, fallback_opening, format_directive,
    language_directive, refusal_reply, speaker_label,
};
pub use persona::{dialogue_system_prompt, persona_generation_prompt};
pub use realism::{customer_realism_prompt, wrapped_realism_prompt};
pub use scoring::{scoring_prompt, scoring_system_prompt};
