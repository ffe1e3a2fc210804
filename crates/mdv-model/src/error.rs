use thiserror::Error;

/// Errors raised while parsing stored rule attributes into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown data type: {0}")]
    UnknownDataType(String),
    #[error("invalid field length: {0}")]
    InvalidLength(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
