use canvass_core::error::CoreError;
use canvass_core::models::ids::QuestionId;
use thiserror::Error;

/// Why a submission or report could not be produced.
///
/// Validation variants are recoverable by re-prompting the respondent.
/// `UnknownQuestionType` and `InvalidInput` reject malformed client data.
/// `CollaboratorUnavailable` carries a storage or transport failure verbatim
/// so the caller can decide whether to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("respondent first and last name are required")]
    MissingRespondentIdentity,

    #[error("question {0} has no answer")]
    IncompleteAnswer(QuestionId),

    #[error("unknown question type: {0}")]
    UnknownQuestionType(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("collaborator unavailable: {0}")]
    CollaboratorUnavailable(String),
}

impl ResponseError {
    /// Whether the respondent can fix this by changing their input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ResponseError::MissingRespondentIdentity | ResponseError::IncompleteAnswer(_)
        )
    }
}

impl From<CoreError> for ResponseError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownQuestionType(kind) => ResponseError::UnknownQuestionType(kind),
            CoreError::MissingField(_) | CoreError::InvalidSelection(_) => {
                ResponseError::InvalidInput(e.to_string())
            }
        }
    }
}
