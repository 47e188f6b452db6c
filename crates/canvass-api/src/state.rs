use std::sync::Arc;

use canvass_storage::store::SurveyStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SurveyStore>,
}
