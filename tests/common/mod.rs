//! Shared fixtures: an app over an in-memory store seeded with five authors.

use author_service::{app, AppState, Author, AuthorService, InMemoryAuthorRepository};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn seed_authors() -> Vec<Author> {
    let ts = Utc.with_ymd_and_hms(2023, 10, 8, 0, 0, 0).unwrap();
    (1..=5)
        .map(|id| Author {
            id,
            first_name: format!("Name{}", id),
            last_name: format!("LastName{}", id),
            created_at: ts,
            updated_at: ts,
        })
        .collect()
}

pub fn create_test_app() -> (Router, Arc<InMemoryAuthorRepository>) {
    let repository = Arc::new(InMemoryAuthorRepository::with_authors(seed_authors()));
    let state = AppState::new(AuthorService::new(repository.clone()));
    (app(state, 64 * 1024), repository)
}

/// Send one request; returns status and the body parsed as JSON (`Value::Null` when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
