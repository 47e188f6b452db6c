use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use canvass_core::authoring::{self, SurveyDraft};
use canvass_core::models::ids::SurveyId;
use canvass_core::models::survey::Survey;
use canvass_responses::page::{paginate, Page, DEFAULT_PER_PAGE};

use super::{Ack, PageQuery};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_surveys(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Survey>>, ApiError> {
    let surveys = state.store.list_surveys().await?;
    Ok(Json(paginate(
        surveys,
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(DEFAULT_PER_PAGE),
    )))
}

pub async fn get_survey(
    State(state): State<AppState>,
    Path(id): Path<SurveyId>,
) -> Result<Json<Survey>, ApiError> {
    Ok(Json(state.store.get_survey(id).await?))
}

pub async fn get_survey_by_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<Survey>, ApiError> {
    // A token that cannot be parsed resolves to no survey, like any unknown one.
    let token: Uuid = token
        .parse()
        .map_err(|_| ApiError::NotFound(format!("no survey for token {token}")))?;
    Ok(Json(state.store.get_survey_by_token(token).await?))
}

pub async fn create_survey(
    State(state): State<AppState>,
    Json(draft): Json<SurveyDraft>,
) -> Result<Json<Survey>, ApiError> {
    let draft = authoring::normalize(draft)?;
    Ok(Json(state.store.create_survey(draft).await?))
}

pub async fn update_survey(
    State(state): State<AppState>,
    Path(id): Path<SurveyId>,
    Json(draft): Json<SurveyDraft>,
) -> Result<Json<Survey>, ApiError> {
    let draft = authoring::normalize(draft)?;
    Ok(Json(state.store.update_survey(id, draft).await?))
}

pub async fn delete_survey(
    State(state): State<AppState>,
    Path(id): Path<SurveyId>,
) -> Result<Json<Ack>, ApiError> {
    state.store.delete_survey(id).await?;
    Ok(Json(Ack::ok()))
}
