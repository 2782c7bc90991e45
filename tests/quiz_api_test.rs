use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use std::collections::HashSet;
use tower::ServiceExt;

fn test_app() -> Router {
    let app_state = quiz_backend::AppState::new();
    Router::new()
        .route("/health", get(quiz_backend::routes::health::health))
        .route("/api/quiz", get(quiz_backend::routes::quiz::get_quiz))
        .route("/api/grade", post(quiz_backend::routes::quiz::grade))
        .with_state(app_state)
        .layer(axum::middleware::from_fn_with_state(
            quiz_backend::middleware::cors::new_cors_state("http://localhost:3000"),
            quiz_backend::middleware::cors::cors_middleware,
        ))
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn quiz_returns_a_random_subset_of_the_bank() {
    let app = test_app();
    let req = Request::builder()
        .method("GET")
        .uri("/api/quiz")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );

    let body = body_json(resp).await;
    let questions = body.as_array().expect("quiz body is a JSON array");
    assert!(questions.len() >= 8 && questions.len() <= 12);

    let mut seen = HashSet::new();
    for q in questions {
        let id = q["id"].as_i64().expect("question id");
        assert!((1..=20).contains(&id));
        assert!(seen.insert(id), "duplicate question id {}", id);
        assert!(q["question"].is_string());

        // Correctness fields are served verbatim alongside the prompt.
        match q["type"].as_str().expect("question type") {
            "text" => assert!(q["correctText"].is_string()),
            "radio" => {
                assert!(q["choices"].is_array());
                assert!(q["correctIndex"].is_i64() || q["correctIndex"].is_u64());
            }
            "checkbox" => {
                assert!(q["choices"].is_array());
                assert!(q["correctIndexes"].is_array());
            }
            other => panic!("unexpected question type {}", other),
        }
    }
}

#[tokio::test]
async fn grading_single_radio_answer_scores_one_of_twenty() {
    let app = test_app();
    let grade_body = json!({ "answers": [ { "id": 1, "value": 2 } ] });
    let req = Request::builder()
        .method("POST")
        .uri("/api/grade")
        .header("content-type", "application/json")
        .body(Body::from(grade_body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["score"], 1);
    assert_eq!(body["total"], 20);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 20);
    assert_eq!(results[0]["id"], 1);
    assert_eq!(results[0]["correct"], true);
    for entry in &results[1..] {
        assert_eq!(entry["correct"], false);
    }
}

#[tokio::test]
async fn grading_applies_coercions_across_answer_shapes() {
    let app = test_app();
    // String id, padded mixed-case text, out-of-order checkbox list, and a
    // numeric string for a radio question.
    let grade_body = json!({
        "answers": [
            { "id": "3", "value": " h2o " },
            { "id": 2, "value": [3, 0, 1] },
            { "id": "1", "value": "2" }
        ]
    });
    let req = Request::builder()
        .method("POST")
        .uri("/api/grade")
        .header("content-type", "application/json")
        .body(Body::from(grade_body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["score"], 3);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["correct"], true);
    assert_eq!(results[1]["correct"], true);
    assert_eq!(results[2]["correct"], true);
}

#[tokio::test]
async fn wrong_payload_shape_is_a_400() {
    let app = test_app();
    for bad in [
        json!({ "answers": "not a list" }),
        json!({ "answers": [ { "id": 1, "value": true } ] }),
        json!({ "answers": [ { "id": 1, "value": ["a", "b"] } ] }),
        json!({ "wrong": [] }),
    ] {
        let req = Request::builder()
            .method("POST")
            .uri("/api/grade")
            .header("content-type", "application/json")
            .body(Body::from(bad.to_string()))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {}", bad);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Invalid payload");
    }
}

#[tokio::test]
async fn unreadable_body_is_a_500() {
    let app = test_app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/grade")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Server error");
}

#[tokio::test]
async fn options_preflight_short_circuits_with_ok() {
    let app = test_app();
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/grade")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-methods")
            .and_then(|v| v.to_str().ok()),
        Some("GET,POST,OPTIONS")
    );
    assert_eq!(
        resp.headers()
            .get("access-control-allow-headers")
            .and_then(|v| v.to_str().ok()),
        Some("Content-Type")
    );
    let body = body_json(resp).await;
    assert_eq!(body, json!("ok"));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
