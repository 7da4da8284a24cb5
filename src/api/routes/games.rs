//! Game routes - catalog, session creation and lookup by join code

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::AppState;
use crate::application::session::{
    game_catalog, CreationError, FindSession, FindSessionError, GameCatalogEntry, SessionCreator,
};
use crate::domain::entities::{GameSession, SessionDetails};
use crate::domain::value_objects::GameType;

/// Convert timestamp to ISO 8601 string
fn timestamp_to_rfc3339(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string())
}

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    /// Raw form input, either a JSON string or a number
    #[serde(rename = "playerCount", default)]
    pub player_count: Value,
}

impl CreateGameRequest {
    fn raw_player_count(&self) -> String {
        match &self.player_count {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameCatalogResponse {
    pub success: bool,
    pub games: Vec<GameCatalogEntry>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: String,
    #[serde(rename = "gameType")]
    pub game_type: String,
    pub code: String,
    #[serde(rename = "playerCount")]
    pub player_count: u8,
    pub status: String,
    #[serde(rename = "wordId", skip_serializing_if = "Option::is_none")]
    pub word_id: Option<String>,
    #[serde(rename = "impostorIndex", skip_serializing_if = "Option::is_none")]
    pub impostor_index: Option<u8>,
    #[serde(rename = "gridSize", skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<u32>,
    #[serde(rename = "gridWidth", skip_serializing_if = "Option::is_none")]
    pub grid_width: Option<u32>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl SessionResponse {
    /// `reveal_roles` exposes the secret word and impostor seat; only the
    /// creator's response carries them
    fn from_session(session: &GameSession, reveal_roles: bool) -> Self {
        let (word_id, impostor_index) = match &session.details {
            SessionDetails::Impostor { word_id, impostor_index } if reveal_roles => {
                (Some(word_id.clone()), Some(*impostor_index))
            }
            _ => (None, None),
        };
        let grid = session.grid();

        Self {
            id: session.id.clone(),
            game_type: session.game_type().as_str().to_string(),
            code: session.code.to_string(),
            player_count: session.player_count.get(),
            status: session.status.as_str().to_string(),
            word_id,
            impostor_index,
            grid_size: grid.map(|g| g.height),
            grid_width: grid.map(|g| g.width),
            created_at: timestamp_to_rfc3339(session.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    pub success: bool,
    pub code: String,
    pub path: String,
    pub session: SessionResponse,
}

#[derive(Debug, Serialize)]
pub struct GetGameResponse {
    pub success: bool,
    pub session: SessionResponse,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(rename = "messageKey", skip_serializing_if = "Option::is_none")]
    pub message_key: Option<&'static str>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, error: &str, code: &str, message_key: Option<&'static str>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            code: code.to_string(),
            message_key,
        }),
    )
}

fn parse_game_type(raw: &str) -> Result<GameType, ApiError> {
    GameType::from_str(raw)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Unknown game", "UNKNOWN_GAME", None))
}

impl From<CreationError> for ApiError {
    fn from(e: CreationError) -> Self {
        let key = Some(e.message_key());
        match e {
            CreationError::InvalidPlayerCount(inner) => error(
                StatusCode::BAD_REQUEST,
                &inner.to_string(),
                "INVALID_PLAYER_COUNT",
                key,
            ),
            CreationError::EmptyWordPool => error(
                StatusCode::SERVICE_UNAVAILABLE,
                "No words available for this game",
                "EMPTY_WORD_POOL",
                key,
            ),
            CreationError::Persistence(_) => error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create game",
                "PERSISTENCE_ERROR",
                key,
            ),
            CreationError::AttemptInProgress => error(
                StatusCode::CONFLICT,
                "A game is already being created",
                "ATTEMPT_IN_PROGRESS",
                key,
            ),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/games - List mini-games with a create flow
pub async fn list_games() -> Json<GameCatalogResponse> {
    Json(GameCatalogResponse {
        success: true,
        games: game_catalog(),
    })
}

/// POST /api/games/:gameType - Create a new game session
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    Path(game_type): Path<String>,
    Json(body): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<CreateGameResponse>), ApiError> {
    let game_type = parse_game_type(&game_type)?;

    let creator = SessionCreator::new(
        state.session_repo.clone(),
        state.word_repo.clone(),
        state.notifier.clone(),
        ChaCha8Rng::from_entropy(),
    );

    let created = creator
        .create_session(game_type, &body.raw_player_count())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateGameResponse {
            success: true,
            code: created.code().to_string(),
            path: created.path.clone(),
            session: SessionResponse::from_session(&created.session, true),
        }),
    ))
}

/// GET /api/games/:gameType/:code - Open a session from its shareable URL
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path((game_type, code)): Path<(String, String)>,
) -> Result<Json<GetGameResponse>, ApiError> {
    let game_type = parse_game_type(&game_type)?;

    let session = FindSession::new(state.session_repo.clone())
        .execute(game_type, &code)
        .await
        .map_err(|e| match e {
            FindSessionError::InvalidCode => {
                error(StatusCode::BAD_REQUEST, "Invalid game code", "INVALID_CODE", None)
            }
            FindSessionError::NotFound => {
                error(StatusCode::NOT_FOUND, "Game not found", "GAME_NOT_FOUND", None)
            }
            FindSessionError::Repository(e) => {
                tracing::error!("Failed to load game {}: {}", code, e);
                error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load game",
                    "GET_GAME_ERROR",
                    None,
                )
            }
        })?;

    Ok(Json(GetGameResponse {
        success: true,
        session: SessionResponse::from_session(&session, false),
    }))
}
