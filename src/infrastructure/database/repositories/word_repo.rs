use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::Word;
use crate::domain::repositories::{RepositoryError, WordRepository};

/// SQLite implementation of WordRepository
pub struct SqliteWordRepository {
    pool: SqlitePool,
}

impl SqliteWordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WordRepository for SqliteWordRepository {
    async fn list_words(&self) -> Result<Vec<Word>, RepositoryError> {
        let rows = sqlx::query_as::<_, (String, String, Option<String>)>(
            "SELECT id, word, category FROM words ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, word, category)| Word { id, word, category })
            .collect())
    }
}
