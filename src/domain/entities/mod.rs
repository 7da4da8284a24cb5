mod game_session;
mod user;
mod word;

pub use game_session::*;
pub use user::*;
pub use word::*;
