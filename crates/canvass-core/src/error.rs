use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown question type: {0}")]
    UnknownQuestionType(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid option selection: {0}")]
    InvalidSelection(String),
}
