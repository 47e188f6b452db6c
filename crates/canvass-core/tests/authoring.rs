use canvass_core::authoring::{normalize, OptionDraft, QuestionDraft, SurveyDraft};
use canvass_core::error::CoreError;
use canvass_core::models::survey::QuestionKind;

fn question(text: &str, kind: &str, options: &[&str]) -> QuestionDraft {
    QuestionDraft {
        text: text.to_string(),
        kind: kind.to_string(),
        options: Some(
            options
                .iter()
                .map(|t| OptionDraft {
                    text: t.to_string(),
                })
                .collect(),
        ),
    }
}

fn draft(questions: Vec<QuestionDraft>) -> SurveyDraft {
    SurveyDraft {
        title: "Team lunch".to_string(),
        description: Some("Where should we go?".to_string()),
        questions,
    }
}

#[test]
fn text_question_options_are_dropped() {
    let normalized = normalize(draft(vec![question("Name?", "text", &["stray", "entries"])])).unwrap();

    assert_eq!(normalized.questions.len(), 1);
    assert_eq!(normalized.questions[0].kind, QuestionKind::Text);
    assert!(normalized.questions[0].options.is_empty());
}

#[test]
fn choice_options_pass_through_in_order() {
    let normalized = normalize(draft(vec![
        question("Cuisine?", "select", &["Thai", "Pizza"]),
        question("Days?", "multiselect", &["Mon", "Wed", "Fri"]),
    ]))
    .unwrap();

    assert_eq!(normalized.questions[0].kind, QuestionKind::Select);
    assert_eq!(normalized.questions[0].options, vec!["Thai", "Pizza"]);
    assert_eq!(normalized.questions[1].kind, QuestionKind::Multiselect);
    assert_eq!(normalized.questions[1].options, vec!["Mon", "Wed", "Fri"]);
}

#[test]
fn missing_options_become_empty() {
    let mut q = question("Cuisine?", "select", &[]);
    q.options = None;

    let normalized = normalize(draft(vec![q])).unwrap();
    assert!(normalized.questions[0].options.is_empty());
}

#[test]
fn question_order_is_kept() {
    let normalized = normalize(draft(vec![
        question("First", "text", &[]),
        question("Second", "select", &["a"]),
        question("Third", "text", &[]),
    ]))
    .unwrap();

    let texts: Vec<_> = normalized.questions.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, ["First", "Second", "Third"]);
}

#[test]
fn unknown_kind_is_rejected() {
    let err = normalize(draft(vec![question("Rate us", "slider", &[])])).unwrap_err();
    assert!(matches!(err, CoreError::UnknownQuestionType(kind) if kind == "slider"));
}

#[test]
fn blank_title_is_rejected() {
    let mut d = draft(vec![]);
    d.title = "   ".to_string();

    let err = normalize(d).unwrap_err();
    assert!(matches!(err, CoreError::MissingField(field) if field == "title"));
}

#[test]
fn draft_reads_wire_shape() {
    let json = r#"{
        "title": "Feedback",
        "questions": [
            { "text": "Comments", "type": "text" },
            { "text": "Score", "type": "select", "options": [{ "text": "Good" }, { "text": "Bad" }] }
        ]
    }"#;

    let d: SurveyDraft = serde_json::from_str(json).unwrap();
    assert!(d.description.is_none());

    let normalized = normalize(d).unwrap();
    assert_eq!(normalized.questions[1].options, vec!["Good", "Bad"]);
}
