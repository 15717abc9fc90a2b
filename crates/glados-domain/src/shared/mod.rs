use serde::{Deserialize, Serialize};

mod numeric;

pub use numeric::{coerce_int, coerce_int_or};

/// Stable numeric error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Input (1xxx)
    InvalidInput = 1001,
    InvalidConfiguration = 1002,

    // Data (4xxx)
    DeserializationError = 4004,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,
}

impl ErrorCode {
    pub fn code(&self) -> u16 {
        *self as u16
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Configuration(_) => ErrorCode::InvalidConfiguration,
            DomainError::Deserialization(_) => ErrorCode::DeserializationError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
        }
    }

    /// Inner message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidInput(msg)
            | DomainError::Configuration(msg)
            | DomainError::Deserialization(msg)
            | DomainError::Infrastructure(msg) => msg,
        }
    }

    /// `[5001] Infrastructure error: ...`
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
