use axum::extract::{Path, Query, State};
use axum::Json;

use canvass_core::models::ids::SurveyId;
use canvass_core::models::respondent::Respondent;
use canvass_responses::matrix::{Matrix, MatrixPage};

use super::PageQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// Rows per matrix page when the caller does not ask for a size.
const MATRIX_PER_PAGE: usize = 50;

/// Raw respondent records with their answers, in submission order.
pub async fn survey_stats(
    State(state): State<AppState>,
    Path(id): Path<SurveyId>,
) -> Result<Json<Vec<Respondent>>, ApiError> {
    Ok(Json(state.store.list_respondents(id).await?))
}

/// The respondent × question table for one survey.
pub async fn survey_matrix(
    State(state): State<AppState>,
    Path(id): Path<SurveyId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<MatrixPage>, ApiError> {
    let survey = state.store.get_survey(id).await?;
    let respondents = state.store.list_respondents(id).await?;

    let page = Matrix::build(&survey, &respondents).into_page(
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(MATRIX_PER_PAGE),
    );
    Ok(Json(page))
}
