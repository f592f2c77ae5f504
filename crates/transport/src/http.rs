//! HTTP adapter for the chat-completion proxy and the transcription
//! endpoint.
//!
//! Wire contracts:
//! - chat: POST `{messages: [{role, content}...], systemPrompt?, temperature}`
//!   → 200 `{choices: [{message: {content}}]}`
//! - transcription: POST `{audioBase64, language}` → 200 `{text}`

use base64::Engine as _;
use serde_json::Value;

use patter_domain::config::TransportConfig;
use patter_domain::{Error, Language, Result};

use crate::traits::{ChatRequest, Transport};

/// `reqwest`-backed transport with a bounded per-request timeout.
pub struct HttpTransport {
    chat_url: String,
    transcribe_url: String,
    temperature: f32,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport from the deserialized config section.
    pub fn from_config(cfg: &TransportConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(from_reqwest)?;

        Ok(Self {
            chat_url: cfg.chat_url.clone(),
            transcribe_url: cfg.transcribe_url.clone(),
            temperature: cfg.temperature,
            client,
        })
    }

    /// The fallible inner chat call.  `chat_complete` flattens this to the
    /// fail-soft contract.
    async fn chat_request(&self, req: &ChatRequest) -> Result<String> {
        let body = build_chat_body(req, self.temperature);

        tracing::debug!(url = %self.chat_url, messages = req.messages.len(), "chat request");

        let resp = self
            .client
            .post(&self.chat_url)
            .json(&body)
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = resp.status();
        let resp_text = resp.text().await.map_err(from_reqwest)?;

        if !status.is_success() {
            return Err(Error::Http(format!("HTTP {} - {}", status.as_u16(), resp_text)));
        }

        let resp_json: Value = serde_json::from_str(&resp_text)?;
        extract_chat_content(&resp_json)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn chat_complete(&self, req: ChatRequest) -> String {
        match self.chat_request(&req).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(error = %e, "chat request failed, returning empty content");
                String::new()
            }
        }
    }

    async fn transcribe(&self, audio: &[u8], lang: Language) -> Result<String> {
        let body = build_transcribe_body(audio, lang);

        tracing::debug!(url = %self.transcribe_url, bytes = audio.len(), lang = %lang, "transcription request");

        let resp = self
            .client
            .post(&self.transcribe_url)
            .json(&body)
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = resp.status();
        let resp_text = resp.text().await.map_err(from_reqwest)?;

        if !status.is_success() {
            return Err(Error::Transcription(format!(
                "HTTP {} - {}",
                status.as_u16(),
                resp_text
            )));
        }

        let resp_json: Value = serde_json::from_str(&resp_text)?;
        resp_json
            .get("text")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or_else(|| Error::Transcription("missing 'text' field in response".into()))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Wire helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Convert a [`reqwest::Error`] into the domain [`Error`] type.  Timeouts
/// map to [`Error::Timeout`]; everything else to [`Error::Http`].
fn from_reqwest(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::Http(e.to_string())
    }
}

fn build_chat_body(req: &ChatRequest, default_temperature: f32) -> Value {
    let mut body = serde_json::json!({
        "messages": req.messages,
        "temperature": req.temperature.unwrap_or(default_temperature),
    });
    if let Some(ref system_prompt) = req.system_prompt {
        body["systemPrompt"] = Value::String(system_prompt.clone());
    }
    body
}

fn build_transcribe_body(audio: &[u8], lang: Language) -> Value {
    serde_json::json!({
        "audioBase64": base64::engine::general_purpose::STANDARD.encode(audio),
        "language": lang.as_str(),
    })
}

fn extract_chat_content(body: &Value) -> Result<String> {
    if let Some(err) = body.get("error") {
        return Err(Error::Http(format!("error field in response body: {err}")));
    }

    let content = body
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|a| a.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|v| v.as_str())
        .map(str::trim)
        .unwrap_or_default();

    if content.is_empty() {
        return Err(Error::Http("no message content in response".into()));
    }
    Ok(content.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patter_domain::Message;

    #[test]
    fn chat_body_carries_messages_and_default_temperature() {
        let req = ChatRequest {
            messages: vec![Message::system("be a customer"), Message::user("hello")],
            system_prompt: None,
            temperature: None,
        };
        // 0.5 is exactly representable, so the f32 -> JSON number conversion
        // is lossless and comparable.
        let body = build_chat_body(&req, 0.5);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hello");
        assert_eq!(body["temperature"], 0.5);
        assert!(body.get("systemPrompt").is_none());
    }

    #[test]
    fn chat_body_request_temperature_wins() {
        let req = ChatRequest { temperature: Some(0.25), ..Default::default() };
        let body = build_chat_body(&req, 0.5);
        assert_eq!(body["temperature"], 0.25);
    }

    #[test]
    fn chat_body_includes_secondary_system_prompt_when_set() {
        let req = ChatRequest {
            system_prompt: Some("stay realistic".into()),
            ..Default::default()
        };
        let body = build_chat_body(&req, 0.5);
        assert_eq!(body["systemPrompt"], "stay realistic");
    }

    #[test]
    fn transcribe_body_encodes_audio_and_language() {
        let body = build_transcribe_body(b"abc", Language::En);
        assert_eq!(body["audioBase64"], "YWJj");
        assert_eq!(body["language"], "en");
    }

    #[test]
    fn content_is_extracted_and_trimmed() {
        let body = serde_json::json!({
            "choices": [{"message": {"content": "  hello there  "}}]
        });
        assert_eq!(extract_chat_content(&body).unwrap(), "hello there");
    }

    #[test]
    fn error_field_in_body_is_a_failure() {
        let body = serde_json::json!({"error": {"message": "rate limited"}});
        let err = extract_chat_content(&body).unwrap_err();
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn missing_choices_is_a_failure() {
        let body = serde_json::json!({"object": "chat.completion"});
        assert!(extract_chat_content(&body).is_err());
    }

    #[test]
    fn blank_content_is_a_failure() {
        let body = serde_json::json!({
            "choices": [{"message": {"content": "   "}}]
        });
        assert!(extract_chat_content(&body).is_err());
    }
}
