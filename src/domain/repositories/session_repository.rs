use async_trait::async_trait;

use crate::domain::entities::GameSession;
use crate::domain::repositories::RepositoryError;

/// Game session store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a new session in a single write.
    ///
    /// A session whose code is already taken fails with `RepositoryError::AlreadyExists`.
    async fn insert_session(&self, session: &GameSession) -> Result<(), RepositoryError>;

    /// Find session by join code
    async fn find_by_code(&self, code: &str) -> Result<Option<GameSession>, RepositoryError>;
}
