/// Severity or category for user-visible notifications.
///
/// Hosts use it to pick the styling of a banner or message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Neutral informational message.
    Info,
    /// A successful operation, e.g. a processed upload.
    Success,
    /// Something the user should correct, e.g. a rejected file selection.
    Warning,
    /// A failure that prevented the requested action.
    Error,
}

impl NotificationType {
    /// Short lowercase tag, used by text hosts as a prefix.
    pub fn tag(&self) -> &'static str {
        match self {
            NotificationType::Info => "info",
            NotificationType::Success => "success",
            NotificationType::Warning => "warning",
            NotificationType::Error => "error",
        }
    }
}

/// A notification payload intended for the user interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    /// The type/severity of the notification, determining its visual style.
    pub notification_type: NotificationType,
    /// The text content to display to the user.
    pub message: String,
}

impl NotificationMessage {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Warning, message)
    }
}
