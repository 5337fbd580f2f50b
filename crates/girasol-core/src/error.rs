//! Errors surfaced at the caller boundary

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QaError {
    #[error("enter at least one document")]
    EmptyCorpus,

    #[error("enter a question")]
    EmptyQuery,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
