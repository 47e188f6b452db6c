//! The respondent × question report table.
//!
//! Rows follow the order respondents are given in (storage order); columns
//! follow survey question order. Every call rebuilds from its inputs, so a
//! deleted respondent simply stops appearing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use canvass_core::models::ids::{QuestionId, RespondentId};
use canvass_core::models::respondent::{Answer, Respondent};
use canvass_core::models::survey::{Question, Survey};

use crate::page::{paginate, Page};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Column {
    pub question_id: QuestionId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatrixRow {
    pub respondent_id: RespondentId,
    pub first_name: String,
    pub last_name: String,
    pub started_at: jiff::Timestamp,
    /// One per column, empty where the respondent has no answer.
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Matrix {
    pub columns: Vec<Column>,
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatrixPage {
    pub columns: Vec<Column>,
    pub rows: Page<MatrixRow>,
}

impl Matrix {
    pub fn build(survey: &Survey, respondents: &[Respondent]) -> Self {
        let columns = survey
            .questions
            .iter()
            .map(|q| Column {
                question_id: q.id,
                text: q.text.clone(),
            })
            .collect();

        Self {
            columns,
            rows: build_matrix(&survey.questions, respondents),
        }
    }

    pub fn into_page(self, page: usize, per_page: usize) -> MatrixPage {
        MatrixPage {
            columns: self.columns,
            rows: paginate(self.rows, page, per_page),
        }
    }
}

/// Build one row per respondent with one cell per question.
///
/// Answers to questions that are no longer in `questions` are not rendered.
pub fn build_matrix(questions: &[Question], respondents: &[Respondent]) -> Vec<MatrixRow> {
    respondents
        .iter()
        .map(|respondent| MatrixRow {
            respondent_id: respondent.id,
            first_name: respondent.first_name.clone(),
            last_name: respondent.last_name.clone(),
            started_at: respondent.started_at,
            cells: questions
                .iter()
                .map(|q| cell_value(respondent.answer_for(q.id)))
                .collect(),
        })
        .collect()
}

/// Display value of one cell: the text if non-empty, else the option id,
/// else empty. Multiselect answers therefore show their joined id list.
pub fn cell_value(answer: Option<&Answer>) -> String {
    let Some(answer) = answer else {
        return String::new();
    };

    match (answer.text.as_deref(), answer.option_id) {
        (Some(text), _) if !text.is_empty() => text.to_string(),
        (_, Some(option_id)) => option_id.to_string(),
        _ => String::new(),
    }
}
