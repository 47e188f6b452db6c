use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use canvass_core::models::ids::{RespondentId, SurveyId};
use canvass_responses::error::ResponseError;
use canvass_responses::submission::SubmitSurveyRequest;
use canvass_storage::error::StorageError;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub message: String,
    pub respondent_id: RespondentId,
}

/// Validate a submission against the survey as it is now and store it.
pub async fn submit_survey(
    State(state): State<AppState>,
    Path(id): Path<SurveyId>,
    Json(request): Json<SubmitSurveyRequest>,
) -> Result<Json<SubmitReceipt>, ApiError> {
    let survey = state.store.get_survey(id).await?;

    let response = request.validate(&survey).inspect_err(|e| {
        tracing::debug!(survey_id = %id, error = %e, "submission rejected");
    })?;

    let respondent = state
        .store
        .submit(response)
        .await
        .map_err(|e| match e {
            // Deleted since it was read above.
            StorageError::NotFound { .. } => ApiError::from(e),
            other => ApiError::from(ResponseError::from(other)),
        })?;

    Ok(Json(SubmitReceipt {
        message: "Thank you for your answers!".to_string(),
        respondent_id: respondent.id,
    }))
}
