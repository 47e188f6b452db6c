use async_trait::async_trait;
use uuid::Uuid;

use canvass_core::authoring::NormalizedDraft;
use canvass_core::models::ids::{OptionId, QuestionId, RespondentId, SurveyId};
use canvass_core::models::respondent::Respondent;
use canvass_core::models::survey::{Question, QuestionOption, Survey};
use canvass_responses::validate::NormalizedResponse;

use crate::error::StorageError;

/// Persistence for surveys and their respondents.
///
/// The store assigns every identity and never reuses one. A submission is
/// written as a single respondent record carrying all of its answers, so it
/// either lands whole or not at all.
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Persist a new survey with fresh ids and a fresh share token.
    async fn create_survey(&self, draft: NormalizedDraft) -> Result<Survey, StorageError>;

    /// Replace a survey's title, description and questions. Questions and
    /// options get fresh ids; id, token and creation time are kept.
    async fn update_survey(&self, id: SurveyId, draft: NormalizedDraft) -> Result<Survey, StorageError>;

    async fn get_survey(&self, id: SurveyId) -> Result<Survey, StorageError>;

    async fn get_survey_by_token(&self, token: Uuid) -> Result<Survey, StorageError>;

    /// All surveys, oldest first.
    async fn list_surveys(&self) -> Result<Vec<Survey>, StorageError>;

    /// Delete a survey and every respondent of it. Missing surveys are ignored.
    async fn delete_survey(&self, id: SurveyId) -> Result<(), StorageError>;

    /// Persist a validated response. The caller validated it against the
    /// survey it names; `finished_at` is stamped here. Fails with `NotFound`
    /// when that survey no longer exists, leaving nothing stored.
    async fn submit(&self, response: NormalizedResponse) -> Result<Respondent, StorageError>;

    /// Respondents of a survey in submission order.
    async fn list_respondents(&self, survey_id: SurveyId) -> Result<Vec<Respondent>, StorageError>;

    /// Delete one respondent with all its answers. Missing respondents are ignored.
    async fn delete_respondent(&self, id: RespondentId) -> Result<(), StorageError>;
}

/// How many ids the questions and options of a draft consume.
pub(crate) fn id_demand(draft: &NormalizedDraft) -> i64 {
    draft
        .questions
        .iter()
        .map(|q| 1 + q.options.len() as i64)
        .sum()
}

/// Turn a normalized draft into stored questions, numbering questions and
/// options consecutively from `first_id`. Uses exactly [`id_demand`] ids.
pub(crate) fn assign_questions(draft: &NormalizedDraft, first_id: i64) -> Vec<Question> {
    let mut next_id = first_id;
    let mut questions = Vec::with_capacity(draft.questions.len());

    for q in &draft.questions {
        let id = QuestionId(next_id);
        next_id += 1;

        let mut options = Vec::with_capacity(q.options.len());
        for text in &q.options {
            options.push(QuestionOption {
                id: OptionId(next_id),
                text: text.clone(),
            });
            next_id += 1;
        }

        questions.push(Question {
            id,
            text: q.text.clone(),
            kind: q.kind,
            options,
        });
    }

    questions
}

pub(crate) fn new_survey(
    id: SurveyId,
    draft: NormalizedDraft,
    questions: Vec<Question>,
) -> Survey {
    Survey {
        id,
        token: Uuid::new_v4(),
        title: draft.title,
        description: draft.description,
        created_at: jiff::Timestamp::now(),
        questions,
    }
}

pub(crate) fn new_respondent(id: RespondentId, response: NormalizedResponse) -> Respondent {
    Respondent {
        id,
        survey_id: response.survey_id,
        first_name: response.name.first_name,
        last_name: response.name.last_name,
        started_at: response.started_at,
        finished_at: Some(jiff::Timestamp::now()),
        answers: response.answers,
    }
}
