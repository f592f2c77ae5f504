//! Network transport to the chat-completion and transcription backends.
//!
//! This is the only crate permitted to perform network I/O.  The chat path
//! is fail-soft by contract (empty string on any ordinary failure — every
//! caller has a fallback reply ready); the transcription path is fail-hard
//! because no meaningful fallback text exists for it.

pub mod http;
pub mod traits;

pub use http::HttpTransport;
pub use traits::{ChatRequest, Transport};
