use async_trait::async_trait;
use aws_sdk_s3::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use canvass_core::authoring::NormalizedDraft;
use canvass_core::keys;
use canvass_core::models::ids::{RespondentId, SurveyId};
use canvass_core::models::respondent::Respondent;
use canvass_core::models::survey::Survey;
use canvass_responses::validate::NormalizedResponse;

use crate::error::StorageError;
use crate::objects::{self, Precondition};
use crate::state;
use crate::store::{self, SurveyStore};

/// How often an id reservation is retried when another writer wins the
/// sequence document.
const SEQUENCE_ATTEMPTS: usize = 8;

/// Next unallocated id, shared by every record kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Sequence {
    next: i64,
}

impl Default for Sequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

/// Surveys and respondents stored as JSON objects in one bucket.
///
/// Layout is defined by [`canvass_core::keys`]. Ids come from a sequence
/// document updated with ETag optimistic locking.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Reserve `count` consecutive ids and return the first.
    async fn reserve_ids(&self, count: i64) -> Result<i64, StorageError> {
        for attempt in 1..=SEQUENCE_ATTEMPTS {
            let loaded =
                state::load_state::<Sequence>(&self.client, &self.bucket, keys::SEQUENCE).await;
            let (sequence, etag) = match loaded {
                Ok((sequence, etag)) => (sequence, Some(etag)),
                Err(StorageError::NotFound { .. }) => (Sequence::default(), None),
                Err(e) => return Err(e),
            };

            let first = sequence.next;
            let advanced = Sequence {
                next: first + count,
            };

            let saved = match etag {
                Some(etag) => {
                    state::save_state_if_match(
                        &self.client,
                        &self.bucket,
                        keys::SEQUENCE,
                        &advanced,
                        &etag,
                    )
                    .await
                }
                None => {
                    state::create_state(&self.client, &self.bucket, keys::SEQUENCE, &advanced)
                        .await
                }
            };

            match saved {
                Ok(_) => return Ok(first),
                Err(StorageError::PreconditionFailed { .. }) => {
                    tracing::debug!(attempt, "id sequence contended, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::warn!(attempts = SEQUENCE_ATTEMPTS, "gave up reserving ids");
        Err(StorageError::SequenceContention {
            attempts: SEQUENCE_ATTEMPTS,
        })
    }

    async fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let body = serde_json::to_vec(value)?;
        objects::put_json(&self.client, &self.bucket, key, body, Precondition::Always).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
        let output = objects::get_object(&self.client, &self.bucket, key).await?;
        Ok(serde_json::from_slice(&output.body)?)
    }

    async fn find_respondent_key(&self, id: RespondentId) -> Result<Option<String>, StorageError> {
        let suffix = keys::respondent_suffix(id);
        let keys = objects::list_objects(&self.client, &self.bucket, keys::RESPONDENTS_PREFIX).await?;
        Ok(keys.into_iter().find(|k| k.ends_with(&suffix)))
    }
}

#[async_trait]
impl SurveyStore for S3Store {
    async fn create_survey(&self, draft: NormalizedDraft) -> Result<Survey, StorageError> {
        let first = self.reserve_ids(1 + store::id_demand(&draft)).await?;
        let id = SurveyId(first);
        let questions = store::assign_questions(&draft, first + 1);
        let survey = store::new_survey(id, draft, questions);

        self.put_json(&keys::survey(id), &survey).await?;
        tracing::info!(survey_id = %id, questions = survey.questions.len(), "survey created");
        Ok(survey)
    }

    async fn update_survey(&self, id: SurveyId, draft: NormalizedDraft) -> Result<Survey, StorageError> {
        let mut survey = self.get_survey(id).await?;
        let first = self.reserve_ids(store::id_demand(&draft)).await?;

        survey.questions = store::assign_questions(&draft, first);
        survey.title = draft.title;
        survey.description = draft.description;

        self.put_json(&keys::survey(id), &survey).await?;
        tracing::info!(survey_id = %id, questions = survey.questions.len(), "survey updated");
        Ok(survey)
    }

    async fn get_survey(&self, id: SurveyId) -> Result<Survey, StorageError> {
        self.get_json(&keys::survey(id)).await
    }

    async fn get_survey_by_token(&self, token: Uuid) -> Result<Survey, StorageError> {
        self.list_surveys()
            .await?
            .into_iter()
            .find(|s| s.token == token)
            .ok_or_else(|| StorageError::NotFound {
                key: format!("{}token/{token}", keys::SURVEYS_PREFIX),
            })
    }

    async fn list_surveys(&self) -> Result<Vec<Survey>, StorageError> {
        let keys = objects::list_objects(&self.client, &self.bucket, keys::SURVEYS_PREFIX).await?;

        let mut surveys = Vec::with_capacity(keys.len());
        for key in &keys {
            surveys.push(self.get_json::<Survey>(key).await?);
        }
        // Keys list lexicographically ("10" before "9"); ids give creation order.
        surveys.sort_by_key(|s| s.id);
        Ok(surveys)
    }

    async fn delete_survey(&self, id: SurveyId) -> Result<(), StorageError> {
        let removed = objects::delete_objects_by_prefix(
            &self.client,
            &self.bucket,
            &keys::survey_respondents_prefix(id),
        )
        .await?;
        objects::delete_object(&self.client, &self.bucket, &keys::survey(id)).await?;

        tracing::info!(survey_id = %id, respondents = removed, "survey deleted");
        Ok(())
    }

    async fn submit(&self, response: NormalizedResponse) -> Result<Respondent, StorageError> {
        let survey_id = response.survey_id;
        self.get_survey(survey_id).await?;

        let id = RespondentId(self.reserve_ids(1).await?);
        let respondent = store::new_respondent(id, response);
        let key = keys::respondent(survey_id, id);
        self.put_json(&key, &respondent).await?;

        // A survey deleted while the record was written takes the record with it.
        if let Err(StorageError::NotFound { key: survey_key }) = self.get_survey(survey_id).await {
            objects::delete_object(&self.client, &self.bucket, &key).await?;
            tracing::info!(survey_id = %survey_id, respondent_id = %id, "survey gone, response discarded");
            return Err(StorageError::NotFound { key: survey_key });
        }

        tracing::info!(
            survey_id = %respondent.survey_id,
            respondent_id = %id,
            answers = respondent.answers.len(),
            "response stored"
        );
        Ok(respondent)
    }

    async fn list_respondents(&self, survey_id: SurveyId) -> Result<Vec<Respondent>, StorageError> {
        let prefix = keys::survey_respondents_prefix(survey_id);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

        let mut respondents = Vec::with_capacity(keys.len());
        for key in &keys {
            respondents.push(self.get_json::<Respondent>(key).await?);
        }
        respondents.sort_by_key(|r| r.id);
        Ok(respondents)
    }

    async fn delete_respondent(&self, id: RespondentId) -> Result<(), StorageError> {
        match self.find_respondent_key(id).await? {
            Some(key) => {
                objects::delete_object(&self.client, &self.bucket, &key).await?;
                tracing::info!(respondent_id = %id, "respondent deleted");
            }
            None => tracing::debug!(respondent_id = %id, "respondent already absent"),
        }
        Ok(())
    }
}
