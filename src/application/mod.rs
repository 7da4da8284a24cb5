pub mod admin;
pub mod notifications;
pub mod session;
