use serde::{Deserialize, Serialize};
use ts_rs::TS;

use canvass_core::models::respondent::{Answer, RespondentName};
use canvass_core::models::selection::Selection;
use canvass_core::models::survey::{QuestionKind, Survey};

use crate::error::ResponseError;
use crate::validate::{self, AnswerMap, NormalizedResponse, RawAnswer};

/// Body of a survey submission as sent by the respondent page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitSurveyRequest {
    pub respondent: RespondentName,
    pub answers: Vec<Answer>,
}

impl SubmitSurveyRequest {
    pub fn validate(&self, survey: &Survey) -> Result<NormalizedResponse, ResponseError> {
        validate::validate(survey, &self.respondent, &answer_map(survey, &self.answers))
    }
}

/// Decode wire answer records into raw values, using the survey to decide
/// which payload field each question reads.
///
/// Records for questions not in the survey are skipped. If a question appears
/// more than once the first record is used.
pub fn answer_map(survey: &Survey, records: &[Answer]) -> AnswerMap {
    let mut map = AnswerMap::new();

    for record in records {
        let Some(question) = survey.question(record.question_id) else {
            continue;
        };
        if map.contains_key(&question.id) {
            continue;
        }

        let raw = match question.kind {
            QuestionKind::Text => RawAnswer::Text(record.text.clone().unwrap_or_default()),
            QuestionKind::Select => RawAnswer::Choice(record.option_id),
            QuestionKind::Multiselect => {
                // A malformed id list counts as no selection.
                let selection = record
                    .text
                    .as_deref()
                    .and_then(|text| text.parse::<Selection>().ok())
                    .unwrap_or_default();
                RawAnswer::Choices(selection.ids().to_vec())
            }
        };
        map.insert(question.id, raw);
    }

    map
}
