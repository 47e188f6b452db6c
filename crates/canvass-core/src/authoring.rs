//! Survey authoring input and its normalization.
//!
//! Drafts come from the admin surface without identities. [`normalize`]
//! parses question kinds and strips options from text questions; the store
//! then assigns ids when it persists the result.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::survey::QuestionKind;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionDraft {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionDraft {
    pub text: String,
    /// Raw kind as entered, e.g. `"multiselect"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub options: Option<Vec<OptionDraft>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveyDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub questions: Vec<QuestionDraft>,
}

/// A question ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuestion {
    pub text: String,
    pub kind: QuestionKind,
    /// Option texts in authoring order. Empty for text questions.
    pub options: Vec<String>,
}

/// A survey ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDraft {
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<NormalizedQuestion>,
}

/// Validate and normalize an authoring draft.
pub fn normalize(draft: SurveyDraft) -> Result<NormalizedDraft, CoreError> {
    if draft.title.trim().is_empty() {
        return Err(CoreError::MissingField("title".to_string()));
    }

    let questions = draft
        .questions
        .into_iter()
        .map(normalize_question)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NormalizedDraft {
        title: draft.title,
        description: draft.description,
        questions,
    })
}

fn normalize_question(draft: QuestionDraft) -> Result<NormalizedQuestion, CoreError> {
    let kind: QuestionKind = draft.kind.parse()?;

    let options = match kind {
        QuestionKind::Text => Vec::new(),
        QuestionKind::Select | QuestionKind::Multiselect => draft
            .options
            .unwrap_or_default()
            .into_iter()
            .map(|o| o.text)
            .collect(),
    };

    Ok(NormalizedQuestion {
        text: draft.text,
        kind,
        options,
    })
}
