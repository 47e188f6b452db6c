mod common;

use canvass_core::models::ids::{OptionId, QuestionId};
use canvass_core::models::respondent::Answer;
use canvass_responses::error::ResponseError;
use canvass_responses::submission::{answer_map, SubmitSurveyRequest};
use canvass_responses::validate::RawAnswer;

use common::*;

fn request(json: &str) -> SubmitSurveyRequest {
    serde_json::from_str(json).unwrap()
}

#[test]
fn wire_submission_validates() {
    let req = request(
        r#"{
            "respondent": { "first_name": "Ann", "last_name": "Lee" },
            "answers": [
                { "question_id": 1, "text": "Ann" },
                { "question_id": 2, "option_id": null, "text": "1,2" },
                { "question_id": 3, "option_id": 12 }
            ]
        }"#,
    );

    let response = req.validate(&three_questions()).unwrap();
    assert_eq!(response.answers[0], Answer::text(NAME_Q, "Ann"));
    assert_eq!(response.answers[1].text.as_deref(), Some("1,2"));
    assert_eq!(response.answers[2], Answer::choice(SIZE_Q, OptionId(12)));
}

#[test]
fn multiselect_text_decodes_to_ids() {
    let map = answer_map(
        &name_and_colors(),
        &[Answer {
            question_id: COLORS_Q,
            option_id: None,
            text: Some("2, 1".to_string()),
        }],
    );

    assert_eq!(
        map.get(&COLORS_Q),
        Some(&RawAnswer::Choices(vec![OptionId(2), OptionId(1)]))
    );
}

#[test]
fn malformed_multiselect_is_reported_incomplete() {
    let req = request(
        r#"{
            "respondent": { "first_name": "Ann", "last_name": "Lee" },
            "answers": [
                { "question_id": 1, "text": "Ann" },
                { "question_id": 2, "text": "red,blue" }
            ]
        }"#,
    );

    let err = req.validate(&name_and_colors()).unwrap_err();
    assert_eq!(err, ResponseError::IncompleteAnswer(COLORS_Q));
}

#[test]
fn select_reads_option_id_and_ignores_text() {
    let map = answer_map(
        &three_questions(),
        &[Answer {
            question_id: SIZE_Q,
            option_id: None,
            text: Some("11".to_string()),
        }],
    );

    assert_eq!(map.get(&SIZE_Q), Some(&RawAnswer::Choice(None)));
}

#[test]
fn unknown_questions_are_skipped_and_first_record_wins() {
    let map = answer_map(
        &name_and_colors(),
        &[
            Answer::text(QuestionId(42), "not in survey"),
            Answer::text(NAME_Q, "first"),
            Answer::text(NAME_Q, "second"),
        ],
    );

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&NAME_Q), Some(&RawAnswer::Text("first".to_string())));
}

#[test]
fn missing_text_field_is_empty_text() {
    let map = answer_map(
        &name_and_colors(),
        &[Answer {
            question_id: NAME_Q,
            option_id: None,
            text: None,
        }],
    );

    assert_eq!(map.get(&NAME_Q), Some(&RawAnswer::Text(String::new())));
}
