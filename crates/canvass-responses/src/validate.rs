use std::collections::HashMap;

use canvass_core::models::ids::{OptionId, QuestionId, SurveyId};
use canvass_core::models::respondent::{Answer, RespondentName};
use canvass_core::models::selection::Selection;
use canvass_core::models::survey::{Question, QuestionKind, Survey};

use crate::error::ResponseError;

/// A respondent's raw value for one question, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAnswer {
    Text(String),
    Choice(Option<OptionId>),
    Choices(Vec<OptionId>),
}

/// Raw values keyed by question. Keys outside the survey are ignored.
pub type AnswerMap = HashMap<QuestionId, RawAnswer>;

/// A complete submission, ready to be persisted as one respondent record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedResponse {
    pub survey_id: SurveyId,
    /// Trimmed.
    pub name: RespondentName,
    pub started_at: jiff::Timestamp,
    /// One per survey question, in survey order.
    pub answers: Vec<Answer>,
}

/// Validate a submission against the survey as it exists now.
pub fn validate(
    survey: &Survey,
    name: &RespondentName,
    answers: &AnswerMap,
) -> Result<NormalizedResponse, ResponseError> {
    validate_at(survey, name, answers, jiff::Timestamp::now())
}

/// [`validate`] with the start timestamp supplied by the caller.
///
/// Rules are checked in order and the first failure is returned: the name
/// first, then every question in survey order.
pub fn validate_at(
    survey: &Survey,
    name: &RespondentName,
    answers: &AnswerMap,
    started_at: jiff::Timestamp,
) -> Result<NormalizedResponse, ResponseError> {
    let first_name = name.first_name.trim();
    let last_name = name.last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(ResponseError::MissingRespondentIdentity);
    }

    let answers = survey
        .questions
        .iter()
        .map(|question| normalize_answer(question, answers.get(&question.id)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NormalizedResponse {
        survey_id: survey.id,
        name: RespondentName::new(first_name, last_name),
        started_at,
        answers,
    })
}

fn normalize_answer(question: &Question, raw: Option<&RawAnswer>) -> Result<Answer, ResponseError> {
    match (question.kind, raw) {
        (QuestionKind::Text, Some(RawAnswer::Text(text))) if !text.trim().is_empty() => {
            Ok(Answer::text(question.id, text.as_str()))
        }
        (QuestionKind::Select, Some(RawAnswer::Choice(Some(option_id)))) => {
            Ok(Answer::choice(question.id, *option_id))
        }
        (QuestionKind::Multiselect, Some(RawAnswer::Choices(ids))) if !ids.is_empty() => {
            let selection: Selection = ids.iter().copied().collect();
            Ok(Answer::choices(question.id, &selection))
        }
        _ => Err(ResponseError::IncompleteAnswer(question.id)),
    }
}
