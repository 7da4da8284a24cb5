mod session_repo;
mod user_repo;
mod word_repo;

pub use session_repo::SqliteSessionRepository;
pub use user_repo::SqliteUserRepository;
pub use word_repo::SqliteWordRepository;
