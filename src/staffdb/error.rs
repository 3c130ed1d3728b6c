use thiserror::Error;

#[derive(Error, Debug)]
pub enum StaffError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Malformed record {ordinal}: {reason}")]
    MalformedRecord { ordinal: usize, reason: String },

    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Database is full ({0} employees); can't add more employees")]
    StoreFull(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl StaffError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn malformed(ordinal: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            ordinal,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StaffError>;
