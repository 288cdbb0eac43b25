//! Transient notification shown over the form

/// Notification tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

/// A single message with explicit dismissal; nothing expires on its own
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    visible: bool,
    message: String,
    severity: Severity,
}

impl NotificationState {
    /// Replace whatever is showing
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.message = message.into();
        self.severity = severity;
        self.visible = true;
    }

    /// Hide the notification. The last message is kept.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let notification = NotificationState::default();
        assert!(!notification.is_visible());
        assert!(notification.message().is_empty());
    }

    #[test]
    fn test_show_overwrites() {
        let mut notification = NotificationState::default();
        notification.show("first", Severity::Info);
        notification.show("second", Severity::Error);
        assert!(notification.is_visible());
        assert_eq!(notification.message(), "second");
        assert_eq!(notification.severity(), Severity::Error);
    }

    #[test]
    fn test_dismiss_hides() {
        let mut notification = NotificationState::default();
        notification.show("saved", Severity::Success);
        notification.dismiss();
        assert!(!notification.is_visible());
    }
}
