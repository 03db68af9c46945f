use std::fmt;

#[derive(Debug)]
pub enum SimError {
    InvalidSquadSize { expected: usize, found: usize },
    InvalidRoute(String),
    InvalidThrow(String),
    ValidationError(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::InvalidSquadSize { expected, found } => {
                write!(f, "Invalid squad size: expected {}, found {}", expected, found)
            }
            SimError::InvalidRoute(msg) => {
                write!(f, "Invalid route: {}", msg)
            }
            SimError::InvalidThrow(msg) => {
                write!(f, "Invalid throw: {}", msg)
            }
            SimError::ValidationError(msg) => {
                write!(f, "Validation error: {}", msg)
            }
            SimError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            SimError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SimError {}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            SimError::DeserializationError(err.to_string())
        } else {
            SimError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
