//! API integration tests, driving the router in-process

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use library_ledger::{api, config::AppConfig, AppState};

fn app(seed: bool) -> Router {
    let mut config = AppConfig::default();
    config.ledger.seed_sample_data = seed;
    api::create_router(AppState::new(config))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", uri));
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = app(false);
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["seeded"], false);
    assert_eq!(body["loan_period_days"], 14);

    let seeded = self::app(true);
    let (_, body) = send(&seeded, "GET", "/health", None).await;
    assert_eq!(body["seeded"], true);
}

#[tokio::test]
async fn test_issue_and_return_flow() {
    let app = app(false);

    let (status, book) = send(
        &app,
        "POST",
        "/books",
        Some(json!({ "title": "Dune", "author": "Herbert", "category": "Fiction" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(book["id"], 1);
    assert_eq!(book["available"], true);

    let (status, member) = send(
        &app,
        "POST",
        "/members",
        Some(json!({ "name": "Ann", "email": "a@x.com", "phone": "555" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(member["id"], 1);

    let (status, loan) = send(
        &app,
        "POST",
        "/loans",
        Some(json!({ "book_id": 1, "member_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(loan["id"], 1);
    assert_eq!(loan["returned"], false);
    assert_eq!(loan["book_title"], "Dune");
    assert_eq!(loan["member_name"], "Ann");

    let issue: NaiveDate = serde_json::from_value(loan["issue_date"].clone()).unwrap();
    let due: NaiveDate = serde_json::from_value(loan["due_date"].clone()).unwrap();
    assert_eq!((due - issue).num_days(), 14);

    let (_, book) = send(&app, "GET", "/books/1", None).await;
    assert_eq!(book["available"], false);

    let (status, body) = send(
        &app,
        "POST",
        "/loans",
        Some(json!({ "book_id": 1, "member_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "BookNotAvailable");

    let (status, body) = send(&app, "POST", "/loans/1/return", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "returned");
    assert_eq!(body["loan"]["returned"], true);

    let (_, book) = send(&app, "GET", "/books/1", None).await;
    assert_eq!(book["available"], true);

    let (status, body) = send(&app, "POST", "/loans/1/return", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "LoanAlreadyReturned");
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = app(true);

    let (status, body) = send(&app, "GET", "/books/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");

    let (status, _) = send(
        &app,
        "POST",
        "/loans",
        Some(json!({ "book_id": 1, "member_id": 99 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "POST", "/loans/7/return", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, loans) = send(&app, "GET", "/loans", None).await;
    assert_eq!(loans.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_search_seeded_books() {
    let app = app(true);

    let (status, books) = send(&app, "GET", "/books?q=clean", None).await;
    assert_eq!(status, StatusCode::OK);
    let books = books.as_array().expect("array");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Clean Code");

    let (_, books) = send(&app, "GET", "/books?author=cormen", None).await;
    assert_eq!(books[0]["title"], "Introduction to Algorithms");

    let (_, books) = send(&app, "GET", "/books?title=martin", None).await;
    assert_eq!(books.as_array().map(Vec::len), Some(0));

    let (_, books) = send(&app, "GET", "/books", None).await;
    assert_eq!(books.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_search_members() {
    let app = app(true);

    let (_, members) = send(&app, "GET", "/members?q=priya", None).await;
    let members = members.as_array().expect("array");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["email"], "priya@example.com");
}

#[tokio::test]
async fn test_missing_title_is_rejected() {
    let app = app(false);

    let (status, body) = send(
        &app,
        "POST",
        "/books",
        Some(json!({ "title": "", "author": "Nobody", "category": "Misc" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_books"], 0);
}

#[tokio::test]
async fn test_stats_and_activity() {
    let app = app(true);

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_books"], 3);
    assert_eq!(stats["total_members"], 2);
    assert_eq!(stats["active_loans"], 0);
    assert_eq!(stats["available_books"], 3);

    let (_, activity) = send(&app, "GET", "/activity", None).await;
    assert_eq!(activity.as_array().map(Vec::len), Some(0));

    for book_id in 1..=3 {
        let (status, _) = send(
            &app,
            "POST",
            "/loans",
            Some(json!({ "book_id": book_id, "member_id": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    send(&app, "POST", "/loans/2/return", None).await;
    send(
        &app,
        "POST",
        "/members",
        Some(json!({ "name": "Zoe", "email": "z@x.com", "phone": "1" })),
    )
    .await;
    send(
        &app,
        "POST",
        "/books",
        Some(json!({ "title": "Dune", "author": "Herbert", "category": "Fiction" })),
    )
    .await;

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_books"], 4);
    assert_eq!(stats["total_members"], 3);
    assert_eq!(stats["active_loans"], 2);
    assert_eq!(stats["available_books"], 2);

    let (_, active) = send(&app, "GET", "/loans?active_only=true", None).await;
    assert_eq!(active.as_array().map(Vec::len), Some(2));

    let (_, activity) = send(&app, "GET", "/activity", None).await;
    let activity = activity.as_array().expect("array");
    assert_eq!(activity.len(), 5);
    assert_eq!(activity[0]["message"], "Added new book: \"Dune\" by Herbert");
    assert_eq!(activity[1]["message"], "Added new member: Zoe");
    assert_eq!(activity[2]["message"], "Returned \"Clean Code\" from Priya");
    assert_eq!(activity[4]["message"], "Issued \"Clean Code\" to Priya");
}

#[tokio::test]
async fn test_missing_category_is_bad_request() {
    let app = app(false);

    let (status, body) = send(
        &app,
        "POST",
        "/books",
        Some(json!({ "title": "Dune", "author": "Herbert" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"].as_str().unwrap_or_default().contains("category"));

    let (status, body) = send(&app, "POST", "/loans", Some(json!({ "book_id": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_books"], 0);
}

#[tokio::test]
async fn test_whitespace_only_fields_are_rejected() {
    let app = app(false);

    let (status, body) = send(
        &app,
        "POST",
        "/books",
        Some(json!({ "title": "   ", "author": "Herbert", "category": "Fiction" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, _) = send(
        &app,
        "POST",
        "/members",
        Some(json!({ "name": " ", "email": "a@x.com", "phone": "555" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, activity) = send(&app, "GET", "/activity", None).await;
    assert_eq!(activity.as_array().map(Vec::len), Some(0));
}
