use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiglaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// A verse lookup that failed outright, as opposed to a verse that is absent.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum LookupError {
    #[error("Verse service unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed verse service response: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, SiglaError>;
