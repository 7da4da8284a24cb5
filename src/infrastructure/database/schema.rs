use sqlx::SqlitePool;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS words (
        id TEXT PRIMARY KEY,
        word TEXT NOT NULL,
        category TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS game_sessions (
        id TEXT PRIMARY KEY,
        game_type TEXT NOT NULL,
        code TEXT NOT NULL UNIQUE,
        player_count INTEGER NOT NULL,
        status TEXT NOT NULL DEFAULT 'waiting',
        word_id TEXT,
        impostor_index INTEGER,
        grid_size INTEGER,
        created_at INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        email TEXT UNIQUE,
        phone TEXT UNIQUE,
        password_hash TEXT,
        is_admin INTEGER NOT NULL DEFAULT 0,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )
    "#,
];

/// Default impostor word pool: (id, word, category)
const DEFAULT_WORDS: &[(&str, &str, &str)] = &[
    ("w-beach", "Beach", "places"),
    ("w-hospital", "Hospital", "places"),
    ("w-library", "Library", "places"),
    ("w-airport", "Airport", "places"),
    ("w-pizza", "Pizza", "food"),
    ("w-sushi", "Sushi", "food"),
    ("w-paella", "Paella", "food"),
    ("w-guitar", "Guitar", "objects"),
    ("w-umbrella", "Umbrella", "objects"),
    ("w-elephant", "Elephant", "animals"),
    ("w-penguin", "Penguin", "animals"),
    ("w-football", "Football", "sports"),
];

/// Create missing tables and seed the default word pool
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    for &(id, word, category) in DEFAULT_WORDS {
        sqlx::query("INSERT OR IGNORE INTO words (id, word, category) VALUES (?, ?, ?)")
            .bind(id)
            .bind(word)
            .bind(category)
            .execute(pool)
            .await?;
    }

    tracing::debug!("Database schema ready");
    Ok(())
}
