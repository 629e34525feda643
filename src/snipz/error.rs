use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipzError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Category mismatch: {0}")]
    CategoryMismatch(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SnipzError>;
