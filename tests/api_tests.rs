//! API Integration Tests for the PartyPlay backend
//!
//! Drives the full router against an in-memory SQLite database.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::{Service, ServiceExt};

use partyplay_backend::api;
use partyplay_backend::domain::entities::User;
use partyplay_backend::domain::repositories::UserRepository;
use partyplay_backend::infrastructure::app_state::AppState;
use partyplay_backend::infrastructure::auth::PasswordService;
use partyplay_backend::infrastructure::config::AppConfig;

const JWT_SECRET: &str = "test-secret-key";
const ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Helper to create a test application
async fn create_test_app() -> (Router, Arc<AppState>) {
    let config = AppConfig::in_memory(JWT_SECRET);
    let state = AppState::with_config(&config)
        .await
        .expect("Failed to create app state");
    let state = Arc::new(state);

    (api::build_app(state.clone(), &config), state)
}

async fn send(app: &mut Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = ServiceExt::<Request<Body>>::ready(app)
        .await
        .unwrap()
        .call(request)
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to make a POST request with JSON body
async fn post_json(app: &mut Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Helper to make a POST request with auth header
async fn post_json_auth(
    app: &mut Router,
    path: &str,
    body: Value,
    token: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    send(app, request).await
}

async fn get(app: &mut Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

fn token(state: &AppState, user_id: &str, is_admin: bool) -> String {
    state.jwt_service.sign(user_id, None, is_admin).unwrap()
}

async fn count_sessions(state: &AppState) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM game_sessions")
        .fetch_one(&state.db)
        .await
        .unwrap()
}

fn assert_join_code(code: &str) {
    assert_eq!(code.len(), 6, "bad code {code}");
    assert!(code.chars().all(|c| ALPHABET.contains(c)), "bad code {code}");
}

// ============================================================================
// Health & catalog
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (mut app, _) = create_test_app().await;

    let (status, body) = get(&mut app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_game_catalog() {
    let (mut app, _) = create_test_app().await;

    let (status, body) = get(&mut app, "/api/games").await;
    assert_eq!(status, StatusCode::OK);

    let games = body["games"].as_array().unwrap();
    assert_eq!(games.len(), 2);
    let impostor = games.iter().find(|g| g["type"] == "impostor").unwrap();
    assert_eq!(impostor["minPlayers"], 3);
    assert_eq!(impostor["maxPlayers"], 20);
    assert_eq!(impostor["createPath"], "/games/impostor");
}

// ============================================================================
// Battleship
// ============================================================================

#[tokio::test]
async fn test_create_battleship_game() {
    let (mut app, state) = create_test_app().await;

    let (status, body) = post_json(&mut app, "/api/games/battleship", json!({"playerCount": "4"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let code = body["code"].as_str().unwrap().to_string();
    assert_join_code(&code);
    assert_eq!(body["path"], format!("/games/battleship/{}", code));
    assert_eq!(body["session"]["playerCount"], 4);
    assert_eq!(body["session"]["gridSize"], 14);
    assert_eq!(body["session"]["gridWidth"], 8);
    assert_eq!(body["session"]["status"], "waiting");
    assert_eq!(count_sessions(&state).await, 1);

    // The shareable URL resolves, case-insensitively
    let (status, body) = get(
        &mut app,
        &format!("/api/games/battleship/{}", code.to_lowercase()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["code"], code);
    assert_eq!(body["session"]["gridSize"], 14);

    // Same code under another game is not a match
    let (status, body) = get(&mut app, &format!("/api/games/impostor/{}", code)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "GAME_NOT_FOUND");
}

#[tokio::test]
async fn test_player_count_accepts_json_number() {
    let (mut app, _) = create_test_app().await;

    let (status, body) = post_json(&mut app, "/api/games/battleship", json!({"playerCount": 10})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["session"]["gridSize"], 32);
}

#[tokio::test]
async fn test_invalid_player_count_writes_nothing() {
    let (mut app, state) = create_test_app().await;

    let cases = [
        ("battleship", json!({"playerCount": "1"})),
        ("battleship", json!({"playerCount": "11"})),
        ("battleship", json!({"playerCount": "four"})),
        ("battleship", json!({})),
        ("impostor", json!({"playerCount": "2"})),
        ("impostor", json!({"playerCount": 21})),
        ("impostor", json!({"playerCount": null})),
    ];

    for (game, body) in cases {
        let (status, response) = post_json(&mut app, &format!("/api/games/{}", game), body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{game} accepted {body}");
        assert_eq!(response["code"], "INVALID_PLAYER_COUNT");
        assert_eq!(response["messageKey"], "errors.invalidPlayerCount");
    }

    assert_eq!(count_sessions(&state).await, 0);
}

#[tokio::test]
async fn test_unknown_game() {
    let (mut app, _) = create_test_app().await;

    let (status, body) = post_json(&mut app, "/api/games/chess", json!({"playerCount": "2"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "UNKNOWN_GAME");
}

#[tokio::test]
async fn test_malformed_code_lookup() {
    let (mut app, _) = create_test_app().await;

    let (status, body) = get(&mut app, "/api/games/battleship/O0I1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_CODE");
}

// ============================================================================
// Impostor
// ============================================================================

#[tokio::test]
async fn test_create_impostor_game() {
    let (mut app, state) = create_test_app().await;

    sqlx::query("DELETE FROM words").execute(&state.db).await.unwrap();
    for id in ["w1", "w2"] {
        sqlx::query("INSERT INTO words (id, word) VALUES (?, ?)")
            .bind(id)
            .bind(format!("word {}", id))
            .execute(&state.db)
            .await
            .unwrap();
    }

    let (status, body) = post_json(&mut app, "/api/games/impostor", json!({"playerCount": "5"})).await;
    assert_eq!(status, StatusCode::CREATED);

    let session = &body["session"];
    assert_eq!(session["playerCount"], 5);
    assert_eq!(session["status"], "waiting");
    let word_id = session["wordId"].as_str().unwrap();
    assert!(word_id == "w1" || word_id == "w2");
    let impostor_index = session["impostorIndex"].as_u64().unwrap();
    assert!(impostor_index < 5);

    let (word_id_stored, index_stored): (String, i64) =
        sqlx::query_as("SELECT word_id, impostor_index FROM game_sessions WHERE code = ?")
            .bind(body["code"].as_str().unwrap())
            .fetch_one(&state.db)
            .await
            .unwrap();
    assert_eq!(word_id_stored, word_id);
    assert_eq!(index_stored as u64, impostor_index);

    // Lookups do not reveal roles
    let (status, lookup) = get(&mut app, &format!("/api/games/impostor/{}", body["code"].as_str().unwrap())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(lookup["session"].get("impostorIndex").is_none());
    assert!(lookup["session"].get("wordId").is_none());
}

#[tokio::test]
async fn test_impostor_with_empty_word_pool() {
    let (mut app, state) = create_test_app().await;
    sqlx::query("DELETE FROM words").execute(&state.db).await.unwrap();

    let (status, body) = post_json(&mut app, "/api/games/impostor", json!({"playerCount": "5"})).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "EMPTY_WORD_POOL");
    assert_eq!(body["messageKey"], "errors.noWordsAvailable");
    assert_eq!(count_sessions(&state).await, 0);
}

#[tokio::test]
async fn test_each_create_draws_a_new_code() {
    let (mut app, state) = create_test_app().await;

    let (_, first) = post_json(&mut app, "/api/games/impostor", json!({"playerCount": "6"})).await;
    let (_, second) = post_json(&mut app, "/api/games/impostor", json!({"playerCount": "6"})).await;

    assert_ne!(first["code"], second["code"]);
    assert_eq!(count_sessions(&state).await, 2);
}

// ============================================================================
// Admin
// ============================================================================

#[tokio::test]
async fn test_admin_routes_require_admin() {
    let (mut app, state) = create_test_app().await;

    let (status, _) = post_json(
        &mut app,
        "/api/admin/users/bulk-delete",
        json!({"userIds": ["u1"]}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = post_json_auth(
        &mut app,
        "/api/admin/users/bulk-delete",
        json!({"userIds": ["u1"]}),
        "not-a-token",
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let player = token(&state, "player", false);
    let (status, _) = post_json_auth(
        &mut app,
        "/api/admin/users/reset-password",
        json!({"phone": "+34612345678", "newPassword": "secret123"}),
        &player,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_bulk_delete_users() {
    let (mut app, state) = create_test_app().await;

    for id in ["admin", "u1", "u2"] {
        state
            .user_repo
            .save(&User::new(id.to_string(), Some(format!("{}@example.com", id)), None))
            .await
            .unwrap();
    }

    let admin = token(&state, "admin", true);
    let (status, body) = post_json_auth(
        &mut app,
        "/api/admin/users/bulk-delete",
        json!({"userIds": ["u1", "u2", "ghost", "admin"]}),
        &admin,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["deleted"], json!(["u1", "u2"]));
    let failed: Vec<&str> = body["failed"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["userId"].as_str().unwrap())
        .collect();
    assert_eq!(failed, vec!["ghost", "admin"]);

    assert!(state.user_repo.find_by_id("u1").await.unwrap().is_none());
    assert!(state.user_repo.find_by_id("admin").await.unwrap().is_some());

    let (status, body) = post_json_auth(
        &mut app,
        "/api/admin/users/bulk-delete",
        json!({"userIds": []}),
        &admin,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_reset_password_by_phone() {
    let (mut app, state) = create_test_app().await;

    state
        .user_repo
        .save(&User::new("u1".to_string(), None, Some("+34612345678".to_string())))
        .await
        .unwrap();

    let admin = token(&state, "admin", true);
    let (status, body) = post_json_auth(
        &mut app,
        "/api/admin/users/reset-password",
        json!({"phone": "+34 612 345 678", "newPassword": "new-secret"}),
        &admin,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], "u1");

    let user = state.user_repo.find_by_id("u1").await.unwrap().unwrap();
    let hash = user.password_hash.unwrap();
    assert!(PasswordService::verify("new-secret", &hash).unwrap());

    let (status, body) = post_json_auth(
        &mut app,
        "/api/admin/users/reset-password",
        json!({"phone": "+34 699 999 999", "newPassword": "new-secret"}),
        &admin,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "USER_NOT_FOUND");

    let (status, body) = post_json_auth(
        &mut app,
        "/api/admin/users/reset-password",
        json!({"phone": "612345678", "newPassword": "new-secret"}),
        &admin,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PHONE");
}

#[tokio::test]
async fn test_cors_preflight() {
    let (mut app, _) = create_test_app().await;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/admin/users/bulk-delete")
        .header("Origin", "https://party.example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "authorization, content-type")
        .body(Body::empty())
        .unwrap();

    let response = ServiceExt::<Request<Body>>::ready(&mut app)
        .await
        .unwrap()
        .call(request)
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
