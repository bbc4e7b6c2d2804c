//! HTTP integration tests driving the router end to end.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use learnai_rust::http::{create_router, AppState};

fn app() -> Router {
    create_router(AppState::new())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], "v1");
}

#[tokio::test]
async fn test_generate_timetable_happy_path() {
    let response = app()
        .oneshot(post_json(
            "/v1/timetable",
            json!({
                "subjects": ["Mathematics", "Physics"],
                "examDate": "2026-06-15",
                "daysUntilExam": 7
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    let timetable = json["timetable"].as_array().unwrap();

    assert_eq!(timetable.len(), 7);
    assert_eq!(timetable[0]["day"], 1);
    assert_eq!(timetable[0]["date"], "2026-06-08");
    assert_eq!(timetable[6]["date"], "2026-06-14");

    let first_session = &timetable[0]["sessions"][0];
    assert_eq!(first_session["subject"], "Mathematics");
    assert_eq!(first_session["timeSlot"], "9:00 AM - 11:00 AM");
    assert_eq!(first_session["focus"], "Algebra fundamentals");
    assert!(first_session["duration"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_generate_timetable_rejects_empty_subjects() {
    let response = app()
        .oneshot(post_json(
            "/v1/timetable",
            json!({
                "subjects": [],
                "examDate": "2026-06-15",
                "daysUntilExam": 7
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_generate_timetable_rejects_blank_subject() {
    let response = app()
        .oneshot(post_json(
            "/v1/timetable",
            json!({
                "subjects": ["Mathematics", "   "],
                "examDate": "2026-06-15",
                "daysUntilExam": 7
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_timetable_rejects_non_positive_days() {
    for days in [0, -5] {
        let response = app()
            .oneshot(post_json(
                "/v1/timetable",
                json!({
                    "subjects": ["Mathematics"],
                    "examDate": "2026-06-15",
                    "daysUntilExam": days
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["message"], "Exam date must be in the future");
    }
}

#[tokio::test]
async fn test_generate_timetable_rejects_extreme_day_count() {
    // Walking a billion days back from the exam date leaves the
    // representable date range; the handler must answer with a JSON
    // error, not a dropped connection.
    let response = app()
        .oneshot(post_json(
            "/v1/timetable",
            json!({
                "subjects": ["Mathematics"],
                "examDate": "2026-06-15",
                "daysUntilExam": 1_000_000_000
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_generate_timetable_rejects_missing_fields() {
    let response = app()
        .oneshot(post_json(
            "/v1/timetable",
            json!({ "subjects": ["Mathematics"] }),
        ))
        .await
        .unwrap();

    // axum's Json extractor rejects the body before the handler runs
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_generate_timetable_rejects_unparseable_date() {
    let response = app()
        .oneshot(post_json(
            "/v1/timetable",
            json!({
                "subjects": ["Mathematics"],
                "examDate": "not-a-date",
                "daysUntilExam": 7
            }),
        ))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_timetable_is_idempotent_over_http() {
    let body = json!({
        "subjects": ["Chemistry", "Biology", "History"],
        "examDate": "2026-09-01",
        "daysUntilExam": 21
    });

    let first = response_json(app().oneshot(post_json("/v1/timetable", body.clone())).await.unwrap()).await;
    let second = response_json(app().oneshot(post_json("/v1/timetable", body)).await.unwrap()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_study_plan_happy_path() {
    let response = app()
        .oneshot(post_json(
            "/v1/study-plan",
            json!({
                "subject": "Mathematics",
                "topic": "Integration",
                "deadline": "next Friday",
                "studyLevel": "advanced"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["schedule"].as_array().unwrap().len(), 4);
    assert_eq!(json["schedule"][0]["focus"], "Overview and foundation");
    assert_eq!(json["practiceStrategies"][1], "Spaced repetition");
}

#[tokio::test]
async fn test_study_plan_rejects_blank_fields() {
    let response = app()
        .oneshot(post_json(
            "/v1/study-plan",
            json!({
                "subject": "",
                "topic": "Integration",
                "deadline": "next Friday"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["message"], "Missing required fields");
}

#[tokio::test]
async fn test_recommendations_happy_path() {
    let response = app()
        .oneshot(post_json(
            "/v1/recommendations",
            json!({
                "deadline": "2026-03-04",
                "durationMinutes": 300,
                "today": "2026-03-01"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["daysRemaining"], 3);
    assert_eq!(json["urgency"], "high");

    let sessions = json["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 3);
    assert_eq!(sessions[0]["date"], "2026-03-01");
    assert_eq!(sessions[0]["duration"], 100);
}

#[tokio::test]
async fn test_recommendations_rejects_past_deadline() {
    let response = app()
        .oneshot(post_json(
            "/v1/recommendations",
            json!({
                "deadline": "2026-03-01",
                "durationMinutes": 300,
                "today": "2026-03-01"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["message"], "Deadline must be in the future");
}
