use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ids::{OptionId, QuestionId, RespondentId, SurveyId};
use super::selection::Selection;

/// One stored answer row.
///
/// The payload shape depends on the question kind: text answers and flattened
/// multiselect answers use `text`, select answers use `option_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: QuestionId,
    pub option_id: Option<OptionId>,
    pub text: Option<String>,
}

impl Answer {
    pub fn text(question_id: QuestionId, text: impl Into<String>) -> Self {
        Self {
            question_id,
            option_id: None,
            text: Some(text.into()),
        }
    }

    pub fn choice(question_id: QuestionId, option_id: OptionId) -> Self {
        Self {
            question_id,
            option_id: Some(option_id),
            text: None,
        }
    }

    pub fn choices(question_id: QuestionId, selection: &Selection) -> Self {
        Self {
            question_id,
            option_id: None,
            text: Some(selection.joined()),
        }
    }
}

/// Who is answering. Both parts are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RespondentName {
    pub first_name: String,
    pub last_name: String,
}

impl RespondentName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// A completed submission against a survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Respondent {
    pub id: RespondentId,
    pub survey_id: SurveyId,
    pub first_name: String,
    pub last_name: String,
    pub started_at: jiff::Timestamp,
    pub finished_at: Option<jiff::Timestamp>,
    pub answers: Vec<Answer>,
}

impl Respondent {
    /// First answer for `question_id` in storage order.
    pub fn answer_for(&self, question_id: QuestionId) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }
}
