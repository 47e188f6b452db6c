use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ids::SurveyId;

/// Which admin screen is showing. Passed down explicitly by the authoring
/// surface instead of living in shared mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "view", rename_all = "snake_case")]
#[ts(export)]
pub enum AdminView {
    #[default]
    List,
    Create,
    Edit { survey_id: SurveyId },
    Stats { survey_id: SurveyId },
}

impl AdminView {
    /// The survey the view is about, if any.
    pub fn survey_id(self) -> Option<SurveyId> {
        match self {
            AdminView::List | AdminView::Create => None,
            AdminView::Edit { survey_id } | AdminView::Stats { survey_id } => Some(survey_id),
        }
    }

    /// Where "back" leads. Every screen returns to the list.
    pub fn back(self) -> AdminView {
        AdminView::List
    }

    /// The screen shown after a draft is saved from this view.
    pub fn after_save(self) -> AdminView {
        match self {
            AdminView::Create | AdminView::Edit { .. } => AdminView::List,
            other => other,
        }
    }
}
