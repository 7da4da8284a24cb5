use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::notifications::Notifier;
use crate::infrastructure::auth::JwtService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::database;
use crate::infrastructure::database::repositories::{
    SqliteSessionRepository, SqliteUserRepository, SqliteWordRepository,
};
use crate::infrastructure::services::TracingNotifier;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// JWT service for bearer token checks
    pub jwt_service: Arc<JwtService>,

    /// Game session store
    pub session_repo: Arc<SqliteSessionRepository>,

    /// Impostor word pool
    pub word_repo: Arc<SqliteWordRepository>,

    /// Account store
    pub user_repo: Arc<SqliteUserRepository>,

    /// Sink for user-facing notices
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_config(&AppConfig::from_env()).await
    }

    pub async fn with_config(config: &AppConfig) -> anyhow::Result<Self> {
        tracing::info!("Connecting to database: {}", config.database_url);
        let db = database::connect(&config.database_url).await?;

        let jwt_service = Arc::new(JwtService::new(&config.jwt_secret));

        let session_repo = Arc::new(SqliteSessionRepository::new(db.clone()));
        let word_repo = Arc::new(SqliteWordRepository::new(db.clone()));
        let user_repo = Arc::new(SqliteUserRepository::new(db.clone()));

        Ok(Self {
            db,
            jwt_service,
            session_repo,
            word_repo,
            user_repo,
            notifier: Arc::new(TracingNotifier),
        })
    }
}
