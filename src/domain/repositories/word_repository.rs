use async_trait::async_trait;

use crate::domain::entities::Word;
use crate::domain::repositories::RepositoryError;

/// Impostor word pool
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WordRepository: Send + Sync {
    /// List every word in the pool
    async fn list_words(&self) -> Result<Vec<Word>, RepositoryError>;
}
