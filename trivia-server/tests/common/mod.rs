//! Shared helpers for router-level tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use trivia_server::models::NewQuestion;
use trivia_server::{build_router, AppState, MemoryStore};

/// Six standard categories and a handful of questions.
pub fn seeded_store() -> MemoryStore {
    MemoryStore::new()
        .with_category(1, "Science")
        .with_category(2, "Art")
        .with_category(3, "Geography")
        .with_category(4, "History")
        .with_category(5, "Entertainment")
        .with_category(6, "Sports")
        .with_question(NewQuestion::new("What is the heaviest organ in the human body?", "The Liver", "1", 4))
        .with_question(NewQuestion::new("Who discovered penicillin?", "Alexander Fleming", "1", 3))
        .with_question(NewQuestion::new("Which Dutch graphic artist drew impossible objects?", "Escher", "2", 1))
        .with_question(NewQuestion::new("What is the largest lake in Africa?", "Lake Victoria", "3", 2))
        .with_question(NewQuestion::new("Who invented Peanut Butter?", "George Washington Carver", "4", 2))
        .with_question(NewQuestion::new("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", "4", 2))
        .with_question(NewQuestion::new("What movie earned Tom Hanks his third straight Oscar nomination?", "Apollo 13", "5", 4))
        .with_question(NewQuestion::new("Which country won the first World Cup in 1930?", "Uruguay", "6", 4))
}

/// Store with `n` questions, all in category 1.
pub fn store_with_questions(n: usize) -> MemoryStore {
    (0..n).fold(MemoryStore::new().with_category(1, "Science"), |store, i| {
        store.with_question(NewQuestion::new(format!("Question number {}", i + 1), "answer", "1", 1))
    })
}

pub fn app(store: MemoryStore) -> Router {
    build_router(AppState::new(Arc::new(store)))
}

pub fn app_with_shared(store: Arc<MemoryStore>) -> Router {
    build_router(AppState::new(store))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}
