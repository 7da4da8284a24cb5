use std::sync::Arc;

use crate::domain::entities::GameSession;
use crate::domain::repositories::{RepositoryError, SessionRepository};
use crate::domain::value_objects::{GameType, JoinCode};

/// Look up a session from its shareable URL
pub struct FindSession<S: SessionRepository> {
    session_repo: Arc<S>,
}

impl<S: SessionRepository> FindSession<S> {
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(
        &self,
        game_type: GameType,
        raw_code: &str,
    ) -> Result<GameSession, FindSessionError> {
        let code = JoinCode::parse(raw_code).ok_or(FindSessionError::InvalidCode)?;

        let session = self
            .session_repo
            .find_by_code(code.as_str())
            .await?
            .ok_or(FindSessionError::NotFound)?;

        // A battleship code typed into the impostor URL is not a match
        if session.game_type() != game_type {
            return Err(FindSessionError::NotFound);
        }

        Ok(session)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FindSessionError {
    #[error("Invalid game code")]
    InvalidCode,
    #[error("Game not found")]
    NotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
