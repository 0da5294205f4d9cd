use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegbookError {
    #[error("Index {index} is out of range for {len} record(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid session name: {0}")]
    InvalidSession(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RegbookError>;
