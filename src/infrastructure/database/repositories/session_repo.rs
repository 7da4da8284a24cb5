use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{GameSession, SessionDetails, SessionStatus};
use crate::domain::repositories::{RepositoryError, SessionRepository};
use crate::domain::value_objects::{GameType, JoinCode, PlayerCount};

/// SQLite implementation of SessionRepository
pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_session(row: &sqlx::sqlite::SqliteRow) -> Result<GameSession, RepositoryError> {
        use sqlx::Row;

        let id: String = row.get("id");
        let game_type_str: String = row.get("game_type");
        let status_str: String = row.get("status");

        let corrupt = |field: &str| RepositoryError::Database(format!("session {id}: bad {field}"));

        let details = match GameType::from_str(&game_type_str).ok_or_else(|| corrupt("game_type"))? {
            GameType::Impostor => SessionDetails::Impostor {
                word_id: row
                    .get::<Option<String>, _>("word_id")
                    .ok_or_else(|| corrupt("word_id"))?,
                impostor_index: row
                    .get::<Option<i64>, _>("impostor_index")
                    .and_then(|i| u8::try_from(i).ok())
                    .ok_or_else(|| corrupt("impostor_index"))?,
            },
            GameType::Battleship => SessionDetails::Battleship {
                grid_size: row
                    .get::<Option<i64>, _>("grid_size")
                    .and_then(|g| u32::try_from(g).ok())
                    .ok_or_else(|| corrupt("grid_size"))?,
            },
        };

        let player_count = u8::try_from(row.get::<i64, _>("player_count"))
            .map_err(|_| corrupt("player_count"))?;

        Ok(GameSession {
            code: JoinCode::from_stored(row.get("code")),
            player_count: PlayerCount::from_stored(player_count),
            status: SessionStatus::from_str(&status_str).unwrap_or(SessionStatus::Waiting),
            details,
            created_at: row.get("created_at"),
            id,
        })
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn insert_session(&self, session: &GameSession) -> Result<(), RepositoryError> {
        let (word_id, impostor_index, grid_size) = match &session.details {
            SessionDetails::Impostor { word_id, impostor_index } => {
                (Some(word_id.as_str()), Some(i64::from(*impostor_index)), None)
            }
            SessionDetails::Battleship { grid_size } => (None, None, Some(i64::from(*grid_size))),
        };

        sqlx::query(
            r#"
            INSERT INTO game_sessions (id, game_type, code, player_count, status, word_id, impostor_index, grid_size, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&session.id)
        .bind(session.game_type().as_str())
        .bind(session.code.as_str())
        .bind(i64::from(session.player_count.get()))
        .bind(session.status.as_str())
        .bind(word_id)
        .bind(impostor_index)
        .bind(grid_size)
        .bind(session.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::AlreadyExists(format!("game code {}", session.code))
            }
            other => RepositoryError::Database(other.to_string()),
        })?;

        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<GameSession>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM game_sessions WHERE code = ?")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.as_ref().map(Self::row_to_session).transpose()
    }
}
