use std::time::Duration;

/// Runtime configuration read from the environment (`.env` is loaded by main)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let db_path = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("DB_PATH"))
            .unwrap_or_else(|_| "sqlite:./data/partyplay.db".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development secret");
            "partyplay-secret-key-change-in-production".to_string()
        });

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(9999);

        let timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);

        Self {
            database_url: normalize_sqlite_url(db_path),
            jwt_secret,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// In-memory configuration for tests
    pub fn in_memory(jwt_secret: &str) -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: jwt_secret.to_string(),
            port: 0,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Ensure the path has the sqlite: prefix
fn normalize_sqlite_url(path: String) -> String {
    if path.starts_with("sqlite:") {
        path
    } else {
        format!("sqlite:{}", path)
    }
}
