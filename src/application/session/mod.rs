mod catalog;
mod create_session;
mod find_session;

pub use catalog::*;
pub use create_session::*;
pub use find_session::*;
