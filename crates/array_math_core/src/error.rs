use thiserror::Error;

/// Errors raised at the host boundary (registry dispatch, JSON API, config).
///
/// The numeric functions themselves never fail: undersized inputs degrade to a
/// zero table or an untouched accumulator.
#[derive(Error, Debug)]
pub enum ArrayMathError {
    #[error("Unknown function: {class}.{name}")]
    UnknownFunction { class: &'static str, name: String },

    #[error("{name} expects {expected} argument(s), got {found}")]
    ArityMismatch { name: &'static str, expected: usize, found: usize },

    #[error("{name}: argument {index} must be {expected}, got {found}")]
    ArgumentType {
        name: &'static str,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unsupported schema version: {found} (expected {expected})")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ArrayMathError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ArrayMathError::Deserialization(err.to_string())
        } else {
            ArrayMathError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ArrayMathError>;
