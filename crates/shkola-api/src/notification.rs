//! Notifications
//!
//! The dismissible message shown after every mutation.

/// How long a notification stays up before hiding itself
pub const AUTO_HIDE_MS: u32 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn operation_successful() -> Self {
        Self::success("Operation successful")
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
