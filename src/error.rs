use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopilotError {
    #[error("Knowledge base has no \"default\" entry")]
    MissingDefaultTopic,
    #[error("Rule targets unknown topic: {0}")]
    UnknownTopic(String),
    #[error("Rule for topic {0} has no keywords")]
    EmptyRule(String),
    #[error("Rule may not target the fallback topic: {0}")]
    ReservedTopic(String),
    #[error("Speech recognition is not available")]
    RecognitionUnavailable,
    #[error("Recognizer already started")]
    RecognizerAlreadyStarted,
    #[error("Copilot session has ended")]
    SessionEnded,
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid knowledge base file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CopilotError>;
