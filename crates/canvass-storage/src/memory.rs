//! In-process store for tests and local runs.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use canvass_core::authoring::NormalizedDraft;
use canvass_core::keys;
use canvass_core::models::ids::{RespondentId, SurveyId};
use canvass_core::models::respondent::Respondent;
use canvass_core::models::survey::Survey;
use canvass_responses::validate::NormalizedResponse;

use crate::error::StorageError;
use crate::store::{self, SurveyStore};

#[derive(Debug)]
struct Tables {
    next_id: i64,
    surveys: BTreeMap<SurveyId, Survey>,
    respondents: BTreeMap<RespondentId, Respondent>,
}

impl Tables {
    fn reserve(&mut self, count: i64) -> i64 {
        let first = self.next_id;
        self.next_id += count;
        first
    }
}

/// Thread-safe in-memory store. Clones share the same data.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                next_id: 1,
                surveys: BTreeMap::new(),
                respondents: BTreeMap::new(),
            })),
        }
    }
}

#[async_trait]
impl SurveyStore for MemoryStore {
    async fn create_survey(&self, draft: NormalizedDraft) -> Result<Survey, StorageError> {
        let mut tables = self.tables.write().await;
        let first = tables.reserve(1 + store::id_demand(&draft));
        let id = SurveyId(first);
        let questions = store::assign_questions(&draft, first + 1);
        let survey = store::new_survey(id, draft, questions);

        tables.surveys.insert(id, survey.clone());
        tracing::info!(survey_id = %id, questions = survey.questions.len(), "survey created");
        Ok(survey)
    }

    async fn update_survey(&self, id: SurveyId, draft: NormalizedDraft) -> Result<Survey, StorageError> {
        let mut tables = self.tables.write().await;
        if !tables.surveys.contains_key(&id) {
            return Err(StorageError::NotFound {
                key: keys::survey(id),
            });
        }

        let first = tables.reserve(store::id_demand(&draft));
        let questions = store::assign_questions(&draft, first);
        let survey = tables.surveys.get_mut(&id).ok_or_else(|| StorageError::NotFound {
            key: keys::survey(id),
        })?;
        survey.questions = questions;
        survey.title = draft.title;
        survey.description = draft.description;

        tracing::info!(survey_id = %id, questions = survey.questions.len(), "survey updated");
        Ok(survey.clone())
    }

    async fn get_survey(&self, id: SurveyId) -> Result<Survey, StorageError> {
        self.tables
            .read()
            .await
            .surveys
            .get(&id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: keys::survey(id),
            })
    }

    async fn get_survey_by_token(&self, token: Uuid) -> Result<Survey, StorageError> {
        self.tables
            .read()
            .await
            .surveys
            .values()
            .find(|s| s.token == token)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: format!("{}token/{token}", keys::SURVEYS_PREFIX),
            })
    }

    async fn list_surveys(&self) -> Result<Vec<Survey>, StorageError> {
        Ok(self.tables.read().await.surveys.values().cloned().collect())
    }

    async fn delete_survey(&self, id: SurveyId) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        tables.surveys.remove(&id);

        let before = tables.respondents.len();
        tables.respondents.retain(|_, r| r.survey_id != id);
        let removed = before - tables.respondents.len();

        tracing::info!(survey_id = %id, respondents = removed, "survey deleted");
        Ok(())
    }

    async fn submit(&self, response: NormalizedResponse) -> Result<Respondent, StorageError> {
        let mut tables = self.tables.write().await;
        if !tables.surveys.contains_key(&response.survey_id) {
            return Err(StorageError::NotFound {
                key: keys::survey(response.survey_id),
            });
        }

        let id = RespondentId(tables.reserve(1));
        let respondent = store::new_respondent(id, response);

        tables.respondents.insert(id, respondent.clone());
        tracing::info!(
            survey_id = %respondent.survey_id,
            respondent_id = %id,
            answers = respondent.answers.len(),
            "response stored"
        );
        Ok(respondent)
    }

    async fn list_respondents(&self, survey_id: SurveyId) -> Result<Vec<Respondent>, StorageError> {
        Ok(self
            .tables
            .read()
            .await
            .respondents
            .values()
            .filter(|r| r.survey_id == survey_id)
            .cloned()
            .collect())
    }

    async fn delete_respondent(&self, id: RespondentId) -> Result<(), StorageError> {
        if self.tables.write().await.respondents.remove(&id).is_some() {
            tracing::info!(respondent_id = %id, "respondent deleted");
        } else {
            tracing::debug!(respondent_id = %id, "respondent already absent");
        }
        Ok(())
    }
}
