//! User-facing notices. Only abstract message keys leave the backend;
//! the client owns the wording.

/// Localization keys sent with notices and error responses
pub mod message_keys {
    pub const INVALID_PLAYER_COUNT: &str = "errors.invalidPlayerCount";
    pub const NO_WORDS_AVAILABLE: &str = "errors.noWordsAvailable";
    pub const CREATE_GAME_FAILED: &str = "errors.createGameFailed";
    pub const CREATE_IN_PROGRESS: &str = "errors.createInProgress";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message_key: &'static str,
}

impl Notice {
    pub fn error(message_key: &'static str) -> Self {
        Self {
            level: NoticeLevel::Error,
            message_key,
        }
    }
}

/// Sink for notices shown to the user
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
