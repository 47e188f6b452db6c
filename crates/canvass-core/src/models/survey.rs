use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::ids::{OptionId, QuestionId, SurveyId};
use crate::error::CoreError;

/// The answer type of a question. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum QuestionKind {
    /// Free-form text.
    Text,
    /// Exactly one option.
    Select,
    /// One or more options.
    Multiselect,
}

impl QuestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Text => "text",
            QuestionKind::Select => "select",
            QuestionKind::Multiselect => "multiselect",
        }
    }

    /// Whether answers to this kind reference options.
    pub fn is_choice(self) -> bool {
        !matches!(self, QuestionKind::Text)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(QuestionKind::Text),
            "select" => Ok(QuestionKind::Select),
            "multiselect" => Ok(QuestionKind::Multiselect),
            other => Err(CoreError::UnknownQuestionType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub id: OptionId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Always empty for [`QuestionKind::Text`].
    #[serde(default)]
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn is_choice(&self) -> bool {
        self.kind.is_choice()
    }

    pub fn option(&self, id: OptionId) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Survey {
    pub id: SurveyId,
    /// Public share handle used in respondent links.
    pub token: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: jiff::Timestamp,
    /// Order fixes the reporting column order.
    pub questions: Vec<Question>,
}

impl Survey {
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
