//! TOML configuration tree.
//!
//! Every field has a serde default so a missing or partial `patter.toml`
//! still yields a fully usable configuration.

use serde::{Deserialize, Serialize};

use crate::session::Language;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub transport: TransportConfig,
    #[serde(default)]
    pub session: SessionDefaults,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Transport endpoints
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Chat-completion proxy endpoint.
    #[serde(default = "d_chat_url")]
    pub chat_url: String,
    /// Speech-transcription endpoint.
    #[serde(default = "d_transcribe_url")]
    pub transcribe_url: String,
    /// Bounded per-request timeout.  A timed-out call is treated exactly
    /// like a failed one; there are no retries.
    #[serde(default = "d_timeout_secs")]
    pub timeout_secs: u64,
    /// Sampling temperature forwarded with every chat request.
    #[serde(default = "d_temperature")]
    pub temperature: f32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            chat_url: d_chat_url(),
            transcribe_url: d_transcribe_url(),
            timeout_secs: d_timeout_secs(),
            temperature: d_temperature(),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Session defaults
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Defaults applied when the caller does not specify a value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDefaults {
    #[serde(default = "d_brand")]
    pub brand: String,
    #[serde(default)]
    pub language: Language,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self { brand: d_brand(), language: Language::default() }
    }
}

// ── serde default helpers ──────────────────────────────────────────

fn d_chat_url() -> String {
    "http://127.0.0.1:3001/chat".into()
}

fn d_transcribe_url() -> String {
    "http://127.0.0.1:8000/api/transcribe".into()
}

fn d_timeout_secs() -> u64 {
    120
}

fn d_temperature() -> f32 {
    0.8
}

fn d_brand() -> String {
    "Gucci".into()
}
