//! Router-level tests against the in-memory store

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use common::*;
use trivia_server::MemoryStore;

// === Categories ===

#[tokio::test]
async fn get_categories() {
    let app = app(seeded_store());
    let (status, body) = get(&app, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Success"], true);
    assert_eq!(body["total_categories"], 6);
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"]["6"], "Sports");
}

#[tokio::test]
async fn list_questions_by_category_with_result() {
    let app = app(seeded_store());
    let (status, body) = get(&app, "/categories/4/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), vec![5, 6]);
    assert_eq!(body["total_questions"], 2);
    assert_eq!(body["current_category"], "History");
}

#[tokio::test]
async fn list_questions_by_category_without_result() {
    let app = app(seeded_store());
    let (status, body) = get(&app, "/categories/50/questions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn list_questions_by_non_numeric_category() {
    let app = app(seeded_store());
    let (status, _) = get(&app, "/categories/science/questions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_questions_by_empty_category() {
    let store = seeded_store().with_category(7, "Music");
    let app = app(store);
    let (status, body) = get(&app, "/categories/7/questions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

// === Paginated questions ===

#[tokio::test]
async fn get_paginated_questions() {
    let app = app(store_with_questions(15));
    let (status, body) = get(&app, "/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());
    assert_eq!(body["total_questions"], 15);
    assert_eq!(body["categories"]["1"], "Science");
    assert!(body["current_category"].is_null());
}

#[tokio::test]
async fn get_questions_with_valid_page() {
    let app = app(store_with_questions(15));
    let (status, body) = get(&app, "/questions?page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (11..=15).collect::<Vec<_>>());
    assert_eq!(body["total_questions"], 15);
}

#[tokio::test]
async fn get_questions_beyond_valid_page() {
    let app = app(store_with_questions(15));
    let (status, body) = get(&app, "/questions?page=1000").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn get_questions_junk_page_defaults_to_first() {
    let app = app(store_with_questions(3));
    let (status, body) = get(&app, "/questions?page=abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3]);
}

#[tokio::test]
async fn get_questions_page_zero_is_not_found() {
    let app = app(store_with_questions(3));
    let (status, _) = get(&app, "/questions?page=0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_store_first_page_is_not_found() {
    let app = app(store_with_questions(0));
    let (status, body) = get(&app, "/questions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn repeated_reads_are_identical() {
    let app = app(seeded_store());

    let first = get(&app, "/questions").await;
    let second = get(&app, "/questions").await;
    assert_eq!(first, second);

    let first = get(&app, "/categories").await;
    let second = get(&app, "/categories").await;
    assert_eq!(first, second);
}

// === Create ===

#[tokio::test]
async fn create_question() {
    let app = app(seeded_store());
    let (status, body) = post_json(
        &app,
        "/questions",
        json!({"question": "my question 4", "answer": "my answer", "category": "2", "difficulty": "2"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["created"], 9);
    assert_eq!(body["questions category"], "2");

    let (_, listing) = get(&app, "/questions").await;
    assert_eq!(listing["total_questions"], 9);
    assert_eq!(ids(&listing), (1..=9).collect::<Vec<_>>());
    let created = listing["questions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|q| q["id"] == 9)
        .expect("new question listed");
    assert_eq!(created["question"], "my question 4");
    assert_eq!(created["difficulty"], 2);
}

#[tokio::test]
async fn create_question_with_numeric_category() {
    let app = app(seeded_store());
    let (status, body) = post_json(
        &app,
        "/questions",
        json!({"question": "q", "answer": "a", "category": 3, "difficulty": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions category"], "3");
}

#[tokio::test]
async fn create_question_missing_fields_fails() {
    let app = app(seeded_store());
    let (status, body) = post_json(&app, "/questions", json!({"category": "1"})).await;

    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 402);
}

#[tokio::test]
async fn create_question_bad_difficulty_fails() {
    let app = app(seeded_store());
    let (status, _) = post_json(
        &app,
        "/questions",
        json!({"question": "q", "answer": "a", "category": "1", "difficulty": "hard"}),
    )
    .await;

    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app(seeded_store());
    let (status, body) = post_raw(&app, "/questions", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], 400);
    assert_eq!(body["message"], "bad request");
}

// === Delete ===

#[tokio::test]
async fn delete_question() {
    let app = app(seeded_store());
    let (status, body) = delete(&app, "/questions/5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 5, "success": true}));

    let (_, listing) = get(&app, "/questions").await;
    assert!(!ids(&listing).contains(&5));
    assert_eq!(listing["total_questions"], 7);
}

#[tokio::test]
async fn delete_question_twice_is_not_found() {
    let app = app(seeded_store());
    assert_eq!(delete(&app, "/questions/5").await.0, StatusCode::OK);

    let (status, body) = delete(&app, "/questions/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn delete_question_with_non_numeric_id() {
    let app = app(seeded_store());
    let (status, _) = delete(&app, "/questions/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_failure_is_reported() {
    let store = Arc::new(seeded_store());
    let app = app_with_shared(store.clone());
    store.set_unavailable(true);

    let (status, body) = delete(&app, "/questions/5").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);

    store.set_unavailable(false);
    assert_eq!(delete(&app, "/questions/5").await.0, StatusCode::OK);
}

// === Search ===

#[tokio::test]
async fn question_search() {
    let app = app(seeded_store());
    let (status, body) = post_json(&app, "/questions/search", json!({"searchTerm": "who"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), vec![2, 5, 6]);
    assert_eq!(body["total_questions"], 3);
    assert!(body["current_category"].is_null());

    for q in body["questions"].as_array().unwrap() {
        let text = q["question"].as_str().unwrap().to_lowercase();
        assert!(text.contains("who"));
    }
}

#[tokio::test]
async fn question_search_no_match() {
    let app = app(seeded_store());
    let (status, body) = post_json(&app, "/questions/search", json!({"searchTerm": "no match"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 0);
    assert!(body["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn question_search_empty_term() {
    let app = app(seeded_store());

    let (status, body) = post_json(&app, "/questions/search", json!({"searchTerm": ""})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "resource not found");

    let (status, _) = post_json(&app, "/questions/search", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// === Quizzes ===

#[tokio::test]
async fn quizzes() {
    let app = app(seeded_store());
    let (status, body) = post_json(
        &app,
        "/quizzes",
        json!({"previous_questions": ["5"], "quiz_category": {"type": "History", "id": 4}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["exhausted"], false);
    assert_eq!(body["id"], json!({"type": "History", "id": 4}));
    assert_eq!(body["question"]["id"], 6);
    assert_eq!(body["question"]["category"], "4");
}

#[tokio::test]
async fn quizzes_any_category_skips_previous() {
    let app = app(seeded_store());
    let previous = vec![1, 2, 3, 4, 5, 6];

    let mut seen = HashSet::new();
    for _ in 0..40 {
        let (status, body) = post_json(
            &app,
            "/quizzes",
            json!({"previous_questions": previous, "quiz_category": {"type": "click", "id": 0}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(!previous.contains(&(id as i32)));
        seen.insert(id);
    }
    assert!(seen.is_subset(&HashSet::from([7, 8])));
}

#[tokio::test]
async fn quizzes_exhausted_category() {
    let app = app(seeded_store());
    let (status, body) = post_json(
        &app,
        "/quizzes",
        json!({"previous_questions": [5, 6], "quiz_category": {"type": "History", "id": 4}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["exhausted"], true);
    assert!(body["question"].is_null());
}

#[tokio::test]
async fn quizzes_fail() {
    let app = app(seeded_store());
    let (status, body) = post_json(
        &app,
        "/quizzes",
        json!({"previous_questions": ["2"], "quiz_category": {"type": "History", "id": 14}}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 422);
    assert_eq!(body["message"], "unprocessable_entity");
}

#[tokio::test]
async fn quizzes_malformed_category() {
    let app = app(seeded_store());
    let (status, _) = post_json(&app, "/quizzes", json!({"previous_questions": [], "quiz_category": "History"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// === Framework-level errors ===

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = app(seeded_store());
    let (status, body) = get(&app, "/answers").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn wrong_method_is_json_405() {
    let app = app(seeded_store());
    let (status, body) = get(&app, "/quizzes").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"success": false, "error": 405, "message": "method not allowed"}));
}

#[tokio::test]
async fn store_outage_is_internal_error() {
    let store = seeded_store();
    store.set_unavailable(true);
    let app = app(store);

    let (status, body) = get(&app, "/categories").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "internal server error");
}

#[tokio::test]
async fn health() {
    let app = app(MemoryStore::new());
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
