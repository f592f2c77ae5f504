use patter_domain::{Language, Message, Result};

/// A chat completion request in the proxy's wire vocabulary.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    /// The conversation messages to send.
    pub messages: Vec<Message>,
    /// Secondary system prompt forwarded in the body's `systemPrompt` field.
    pub system_prompt: Option<String>,
    /// Sampling temperature.  `None` applies the adapter's configured default.
    pub temperature: Option<f32>,
}

/// The outbound call contract to the LLM/ASR backends.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a chat completion request and wait for the reply content.
    ///
    /// Fail-soft: any ordinary failure — non-2xx status, malformed body, an
    /// `error` field in the body, missing or empty content, timeout — yields
    /// an empty string, never an error.  One attempt only, no retries.
    async fn chat_complete(&self, req: ChatRequest) -> String;

    /// Transcribe recorded audio.
    ///
    /// Raises on failure: there is no fallback text to substitute for a
    /// transcription.
    async fn transcribe(&self, audio: &[u8], lang: Language) -> Result<String>;
}
