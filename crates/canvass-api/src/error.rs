use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use canvass_core::error::CoreError;
use canvass_core::models::ids::QuestionId;
use canvass_responses::error::ResponseError;
use canvass_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// The respondent must fix their input. Carries the offending question
    /// when there is one.
    Invalid {
        message: String,
        question_id: Option<QuestionId>,
    },
    /// Storage failed while accepting a submission; safe to retry.
    Unavailable(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    question_id: Option<QuestionId>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, question_id) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Invalid {
                message,
                question_id,
            } => (StatusCode::UNPROCESSABLE_ENTITY, message, question_id),
            ApiError::Unavailable(msg) => {
                tracing::warn!("collaborator unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "storage unavailable, try again".to_string(),
                    None,
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                question_id,
            }),
        )
            .into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { key } => ApiError::NotFound(format!("object not found: {key}")),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        // Every core error describes a bad draft or record sent by the client.
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ResponseError> for ApiError {
    fn from(e: ResponseError) -> Self {
        match e {
            ResponseError::MissingRespondentIdentity => ApiError::Invalid {
                message: e.to_string(),
                question_id: None,
            },
            ResponseError::IncompleteAnswer(question_id) => ApiError::Invalid {
                message: e.to_string(),
                question_id: Some(question_id),
            },
            ResponseError::UnknownQuestionType(_) | ResponseError::InvalidInput(_) => {
                ApiError::BadRequest(e.to_string())
            }
            ResponseError::CollaboratorUnavailable(msg) => ApiError::Unavailable(msg),
        }
    }
}
