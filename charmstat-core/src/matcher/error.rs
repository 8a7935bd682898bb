use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("unclosed placeholder starting at byte {position}")]
    UnclosedPlaceholder { position: usize },

    #[error("unmatched '}}' at byte {position}")]
    UnmatchedClosingBrace { position: usize },

    #[error("empty placeholder at byte {position}")]
    EmptyPlaceholder { position: usize },

    #[error("invalid field name '{name}'")]
    InvalidFieldName { name: String },

    #[error("field '{name}' appears more than once")]
    DuplicateField { name: String },

    #[error("failed to build matcher: {0}")]
    Regex(#[from] regex::Error),
}
