//! Object key conventions.
//!
//! Pure string functions, no AWS SDK dependency. These define the canonical
//! layout of objects in the Canvass bucket.

use crate::models::ids::{RespondentId, SurveyId};

pub const SURVEYS_PREFIX: &str = "surveys/";

pub const RESPONDENTS_PREFIX: &str = "respondents/";

pub fn survey(id: SurveyId) -> String {
    format!("surveys/{id}.json")
}

pub fn survey_respondents_prefix(survey_id: SurveyId) -> String {
    format!("respondents/{survey_id}/")
}

pub fn respondent(survey_id: SurveyId, id: RespondentId) -> String {
    format!("respondents/{survey_id}/{id}.json")
}

/// Suffix that identifies a respondent object regardless of its survey.
pub fn respondent_suffix(id: RespondentId) -> String {
    format!("/{id}.json")
}

pub const SEQUENCE: &str = "_state/sequence.json";
