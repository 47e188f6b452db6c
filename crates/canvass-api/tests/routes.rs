use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use canvass_api::state::AppState;
use canvass_storage::memory::MemoryStore;

fn app() -> Router {
    canvass_api::router(AppState {
        store: Arc::new(MemoryStore::new()),
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn colors_draft() -> Value {
    json!({
        "title": "Colors",
        "description": "A short one",
        "questions": [
            { "text": "Name?", "type": "text", "options": [{ "text": "dropped" }] },
            { "text": "Colors?", "type": "multiselect", "options": [{ "text": "Red" }, { "text": "Blue" }] }
        ]
    })
}

async fn create(app: &Router) -> Value {
    let (status, survey) = send(app, Method::POST, "/admin/surveys", Some(colors_draft())).await;
    assert_eq!(status, StatusCode::OK);
    survey
}

fn submission(survey: &Value, first: &str, name: &str) -> Value {
    let red = &survey["questions"][1]["options"][0]["id"];
    let blue = &survey["questions"][1]["options"][1]["id"];
    json!({
        "respondent": { "first_name": first, "last_name": "Lee" },
        "answers": [
            { "question_id": survey["questions"][0]["id"], "text": name },
            { "question_id": survey["questions"][1]["id"], "option_id": null, "text": format!("{red},{blue}") }
        ]
    })
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn created_survey_drops_text_options() {
    let app = app();
    let survey = create(&app).await;

    assert_eq!(survey["title"], "Colors");
    assert_eq!(survey["questions"][0]["type"], "text");
    assert_eq!(survey["questions"][0]["options"], json!([]));
    assert_eq!(survey["questions"][1]["options"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_question_type_is_a_bad_request() {
    let draft = json!({
        "title": "Broken",
        "questions": [{ "text": "Rate", "type": "slider" }]
    });
    let (status, body) = send(&app(), Method::POST, "/admin/surveys", Some(draft)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("slider"));
}

#[tokio::test]
async fn survey_is_served_by_id_and_token() {
    let app = app();
    let survey = create(&app).await;
    let id = survey["id"].as_i64().unwrap();
    let token = survey["token"].as_str().unwrap();

    let (status, by_id) = send(&app, Method::GET, &format!("/surveys/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id, survey);

    let (status, by_token) = send(&app, Method::GET, &format!("/surveys/token/{token}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_token, survey);

    let (status, _) = send(&app, Method::GET, "/surveys/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unresolvable_tokens_are_not_found() {
    let app = app();
    create(&app).await;

    let (status, _) = send(&app, Method::GET, "/surveys/token/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let unknown = "6f1c2a7e-0000-4000-8000-000000000000";
    let (status, _) = send(&app, Method::GET, &format!("/surveys/token/{unknown}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn submitting_to_a_deleted_survey_is_not_found() {
    let app = app();
    let survey = create(&app).await;
    let id = survey["id"].as_i64().unwrap();

    let (status, _) = send(&app, Method::DELETE, &format!("/admin/surveys/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let body = submission(&survey, "Ann", "Ann");
    let (status, _) = send(&app, Method::POST, &format!("/surveys/{id}/submit"), Some(body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, stats) = send(&app, Method::GET, &format!("/admin/surveys/{id}/stats"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats, json!([]));
}

#[tokio::test]
async fn survey_list_is_paginated() {
    let app = app();
    for _ in 0..12 {
        create(&app).await;
    }

    let (status, first) = send(&app, Method::GET, "/admin/surveys", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["items"].as_array().unwrap().len(), 10);
    assert_eq!(first["total_pages"], 2);

    let (_, second) = send(&app, Method::GET, "/admin/surveys?page=2", None).await;
    assert_eq!(second["items"].as_array().unwrap().len(), 2);
    assert_eq!(second["page"], 2);
}

#[tokio::test]
async fn submission_round_trips_into_stats_and_matrix() {
    let app = app();
    let survey = create(&app).await;
    let id = survey["id"].as_i64().unwrap();

    let (status, receipt) = send(
        &app,
        Method::POST,
        &format!("/surveys/{id}/submit"),
        Some(submission(&survey, "Ann", "Ann")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(receipt["respondent_id"].is_number());

    let (_, stats) = send(&app, Method::GET, &format!("/admin/surveys/{id}/stats"), None).await;
    let respondents = stats.as_array().unwrap();
    assert_eq!(respondents.len(), 1);
    assert_eq!(respondents[0]["first_name"], "Ann");
    assert!(respondents[0]["finished_at"].is_string());
    assert_eq!(respondents[0]["answers"].as_array().unwrap().len(), 2);

    let (_, matrix) = send(&app, Method::GET, &format!("/admin/surveys/{id}/matrix"), None).await;
    let red = survey["questions"][1]["options"][0]["id"].as_i64().unwrap();
    let blue = survey["questions"][1]["options"][1]["id"].as_i64().unwrap();
    assert_eq!(matrix["columns"][0]["text"], "Name?");
    assert_eq!(matrix["columns"][1]["text"], "Colors?");
    assert_eq!(
        matrix["rows"]["items"][0]["cells"],
        json!(["Ann", format!("{red},{blue}")])
    );
    assert_eq!(matrix["rows"]["total_pages"], 1);
}

#[tokio::test]
async fn incomplete_submission_names_the_question() {
    let app = app();
    let survey = create(&app).await;
    let id = survey["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/surveys/{id}/submit"),
        Some(submission(&survey, "Ann", "   ")),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["question_id"], survey["questions"][0]["id"]);

    let (_, stats) = send(&app, Method::GET, &format!("/admin/surveys/{id}/stats"), None).await;
    assert_eq!(stats, json!([]));
}

#[tokio::test]
async fn missing_name_is_rejected() {
    let app = app();
    let survey = create(&app).await;
    let id = survey["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/surveys/{id}/submit"),
        Some(submission(&survey, " ", "Ann")),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.get("question_id").is_none());
}

#[tokio::test]
async fn empty_survey_matrix_has_no_pages() {
    let app = app();
    let survey = create(&app).await;
    let id = survey["id"].as_i64().unwrap();

    let (status, matrix) = send(&app, Method::GET, &format!("/admin/surveys/{id}/matrix"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(matrix["rows"]["items"], json!([]));
    assert_eq!(matrix["rows"]["total_pages"], 0);
}

#[tokio::test]
async fn deleting_a_respondent_removes_the_row() {
    let app = app();
    let survey = create(&app).await;
    let id = survey["id"].as_i64().unwrap();

    let mut respondent_ids = Vec::new();
    for name in ["Ann", "Bo", "Cy"] {
        let (_, receipt) = send(
            &app,
            Method::POST,
            &format!("/surveys/{id}/submit"),
            Some(submission(&survey, name, name)),
        )
        .await;
        respondent_ids.push(receipt["respondent_id"].as_i64().unwrap());
    }

    let (status, ack) = send(
        &app,
        Method::DELETE,
        &format!("/admin/respondents/{}", respondent_ids[1]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["ok"], true);

    let (_, matrix) = send(&app, Method::GET, &format!("/admin/surveys/{id}/matrix"), None).await;
    let rows: Vec<i64> = matrix["rows"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["respondent_id"].as_i64().unwrap())
        .collect();
    assert_eq!(rows, [respondent_ids[0], respondent_ids[2]]);
}

#[tokio::test]
async fn update_and_delete_survey() {
    let app = app();
    let survey = create(&app).await;
    let id = survey["id"].as_i64().unwrap();

    let mut draft = colors_draft();
    draft["title"] = json!("Colours");
    let (status, updated) = send(&app, Method::PUT, &format!("/admin/surveys/{id}"), Some(draft)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Colours");
    assert_eq!(updated["token"], survey["token"]);

    let (status, _) = send(&app, Method::DELETE, &format!("/admin/surveys/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &format!("/admin/surveys/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
