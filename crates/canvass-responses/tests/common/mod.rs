#![allow(dead_code)]

use canvass_core::models::ids::{OptionId, QuestionId, RespondentId, SurveyId};
use canvass_core::models::respondent::{Answer, Respondent};
use canvass_core::models::survey::{Question, QuestionKind, QuestionOption, Survey};

pub const NAME_Q: QuestionId = QuestionId(1);
pub const COLORS_Q: QuestionId = QuestionId(2);
pub const SIZE_Q: QuestionId = QuestionId(3);

pub fn timestamp(s: &str) -> jiff::Timestamp {
    s.parse().unwrap()
}

pub fn option(id: i64, text: &str) -> QuestionOption {
    QuestionOption {
        id: OptionId(id),
        text: text.to_string(),
    }
}

pub fn question(id: QuestionId, text: &str, kind: QuestionKind, options: Vec<QuestionOption>) -> Question {
    Question {
        id,
        text: text.to_string(),
        kind,
        options,
    }
}

pub fn survey(questions: Vec<Question>) -> Survey {
    Survey {
        id: SurveyId(1),
        token: "7b0f5a52-6f1e-4d2b-9b8e-3c1d2a4f5e60".parse().unwrap(),
        title: "Preferences".to_string(),
        description: None,
        created_at: timestamp("2025-07-01T12:00:00Z"),
        questions,
    }
}

/// "Name?" (text) and "Colors?" (multiselect: 1 Red, 2 Blue).
pub fn name_and_colors() -> Survey {
    survey(vec![
        question(NAME_Q, "Name?", QuestionKind::Text, vec![]),
        question(
            COLORS_Q,
            "Colors?",
            QuestionKind::Multiselect,
            vec![option(1, "Red"), option(2, "Blue")],
        ),
    ])
}

/// [`name_and_colors`] plus "Size?" (select: 10 S, 11 M, 12 L).
pub fn three_questions() -> Survey {
    let mut s = name_and_colors();
    s.questions.push(question(
        SIZE_Q,
        "Size?",
        QuestionKind::Select,
        vec![option(10, "S"), option(11, "M"), option(12, "L")],
    ));
    s
}

pub fn respondent(id: i64, first: &str, last: &str, answers: Vec<Answer>) -> Respondent {
    Respondent {
        id: RespondentId(id),
        survey_id: SurveyId(1),
        first_name: first.to_string(),
        last_name: last.to_string(),
        started_at: timestamp("2025-07-02T09:00:00Z"),
        finished_at: None,
        answers,
    }
}
