use crate::application::notifications::{Notice, NoticeLevel, Notifier};

/// Notifier for the HTTP deployment.
///
/// The client renders its own toast from the error response, so the server
/// side only records the notice.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => tracing::warn!(message_key = notice.message_key, "User notice"),
            NoticeLevel::Info => tracing::info!(message_key = notice.message_key, "User notice"),
        }
    }
}
