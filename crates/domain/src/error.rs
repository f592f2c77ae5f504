/// Shared error type used across all Patter crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP: {0}")]
    Http(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("config: {0}")]
    Config(String),

    #[error("persona generation: {0}")]
    PersonaGeneration(String),

    #[error("transcription: {0}")]
    Transcription(String),

    #[error("session state: {0}")]
    SessionState(String),

    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
