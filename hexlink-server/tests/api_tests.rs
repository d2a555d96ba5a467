//! Integration tests for the hexlink-server API

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use hexlink_server::{create_router, ServerConfig, ServerState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let config = ServerConfig::default();
    let state = Arc::new(ServerState::new());
    create_router(&config, state)
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// `size` x `size` board of nulls
fn empty_board(size: usize) -> Value {
    json!(vec![vec![Value::Null; size]; size])
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert_eq!(json["engine"], "rust");
    assert_eq!(json["strategies"][2], "simulated");
}

#[tokio::test]
async fn test_ai_move_empty_board_heuristic_center() {
    let app = test_app();

    let (status, json) = post_json(
        app,
        "/get_ai_move",
        json!({
            "board": empty_board(11),
            "size": 11,
            "difficulty": "heuristic",
            "player": "red",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    // Empty board: the heuristic strategy always opens at the exact center
    assert_eq!(json["move"]["q"], 5);
    assert_eq!(json["move"]["r"], 5);
}

#[tokio::test]
async fn test_ai_move_defaults() {
    // Only the board supplied: size 11, heuristic, blue by default
    let app = test_app();

    let (status, json) = post_json(app, "/get_ai_move", json!({ "board": empty_board(11) })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["move"]["q"], 5);
    assert_eq!(json["move"]["r"], 5);
}

#[tokio::test]
async fn test_ai_move_full_board_is_null_move() {
    let app = test_app();

    let board: Vec<Vec<&str>> = (0..3)
        .map(|r| {
            (0..3)
                .map(|q| if (q + r) % 2 == 0 { "red" } else { "blue" })
                .collect()
        })
        .collect();

    let (status, json) = post_json(
        app,
        "/get_ai_move",
        json!({
            "board": board,
            "size": 3,
            "difficulty": "random",
            "player": "red",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert!(json["move"].is_null(), "expected null move, got {json}");
}

#[tokio::test]
async fn test_ai_move_accepts_legacy_difficulty_names() {
    let app = test_app();

    let (status, json) = post_json(
        app,
        "/get_ai_move",
        json!({
            "board": empty_board(5),
            "size": 5,
            "difficulty": "medium",
            "player": "blue",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["move"]["q"], 2);
    assert_eq!(json["move"]["r"], 2);
}

#[tokio::test]
async fn test_ai_move_rejects_mismatched_size() {
    let app = test_app();

    let (status, json) = post_json(
        app,
        "/get_ai_move",
        json!({
            "board": empty_board(4),
            "size": 5,
            "difficulty": "random",
            "player": "red",
        }),
    )
    .await;

    // Structured failure, not a 5xx
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("rows"));
}

#[tokio::test]
async fn test_ai_move_rejects_ragged_board() {
    let app = test_app();

    let (status, json) = post_json(
        app,
        "/get_ai_move",
        json!({
            "board": [[null, null], [null]],
            "size": 2,
            "difficulty": "simulated",
            "player": "blue",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("row 1"));
}

#[tokio::test]
async fn test_ai_move_simulated_swap_reflection() {
    let app = test_app();

    let mut rows = vec![vec![Value::Null; 11]; 11];
    rows[3][2] = json!("red"); // board[r][q]: red opener at q=2, r=3

    let (status, json) = post_json(
        app,
        "/get_ai_move",
        json!({
            "board": rows,
            "size": 11,
            "difficulty": "simulated",
            "player": "blue",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["move"]["q"], 8);
    assert_eq!(json["move"]["r"], 7);
}

#[tokio::test]
async fn test_ai_move_result_is_empty_cell() {
    let app = test_app();

    let mut rows = vec![vec![Value::Null; 5]; 5];
    rows[2][2] = json!("red");
    rows[1][3] = json!("blue");

    let (status, json) = post_json(
        app,
        "/get_ai_move",
        json!({
            "board": rows,
            "size": 5,
            "difficulty": "random",
            "player": "red",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let q = json["move"]["q"].as_u64().unwrap() as usize;
    let r = json["move"]["r"].as_u64().unwrap() as usize;
    assert!(rows[r][q].is_null(), "picked occupied cell ({q},{r})");
}
