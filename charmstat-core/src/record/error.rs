use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("log entry is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("unknown severity level '{value}'")]
    UnknownSeverity { value: String },
}
