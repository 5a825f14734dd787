use crate::constants::{NOTIFY_DEFAULT_MS, NOTIFY_ERROR_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[allow(dead_code)] // default banner style; nothing on the page raises it yet
    Info,
}

impl NotificationKind {
    pub fn class_suffix(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "#00ff41",
            NotificationKind::Error => "#ff5f56",
            NotificationKind::Warning => "#ffbd2e",
            NotificationKind::Info => "#00d4ff",
        }
    }

    /// How long the banner stays before sliding out.
    pub fn visible_ms(self) -> u32 {
        match self {
            NotificationKind::Error => NOTIFY_ERROR_MS,
            _ => NOTIFY_DEFAULT_MS,
        }
    }
}
