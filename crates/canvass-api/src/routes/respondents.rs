use axum::extract::{Path, State};
use axum::Json;

use canvass_core::models::ids::RespondentId;

use super::Ack;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn delete_respondent(
    State(state): State<AppState>,
    Path(id): Path<RespondentId>,
) -> Result<Json<Ack>, ApiError> {
    state.store.delete_respondent(id).await?;
    Ok(Json(Ack::ok()))
}
