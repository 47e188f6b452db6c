//! canvass-api
//!
//! HTTP surface over the survey engine. Admin routes author surveys and read
//! reports; public routes serve a survey to respondents and accept their
//! submissions.

use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router over `state`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Admin: authoring
        .route("/admin/surveys", get(routes::surveys::list_surveys))
        .route("/admin/surveys", post(routes::surveys::create_survey))
        .route("/admin/surveys/{id}", get(routes::surveys::get_survey))
        .route("/admin/surveys/{id}", put(routes::surveys::update_survey))
        .route("/admin/surveys/{id}", delete(routes::surveys::delete_survey))
        // Admin: reporting
        .route("/admin/surveys/{id}/stats", get(routes::stats::survey_stats))
        .route("/admin/surveys/{id}/matrix", get(routes::stats::survey_matrix))
        .route(
            "/admin/respondents/{id}",
            delete(routes::respondents::delete_respondent),
        )
        // Public
        .route("/surveys/{id}", get(routes::surveys::get_survey))
        .route(
            "/surveys/token/{token}",
            get(routes::surveys::get_survey_by_token),
        )
        .route("/surveys/{id}/submit", post(routes::submissions::submit_survey))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
