mod session_repository;
mod user_repository;
mod word_repository;

pub use session_repository::*;
pub use user_repository::*;
pub use word_repository::*;
