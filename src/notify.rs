//! User-facing notifications produced by session operations.

use std::time::Duration;

use crate::config::NOTIFICATION_LIFE_MS;

/// Every notification carries the same summary line.
pub const SUMMARY: &str = "Message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// `None` means the notification stays until dismissed.
    pub life: Option<Duration>,
}

impl Notification {
    pub fn success(detail: impl Into<String>) -> Self {
        Self::transient(Severity::Success, detail)
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self::transient(Severity::Error, detail)
    }

    /// Warnings are sticky.
    pub fn warn(detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warn,
            summary: SUMMARY.to_string(),
            detail: detail.into(),
            life: None,
        }
    }

    fn transient(severity: Severity, detail: impl Into<String>) -> Self {
        Self {
            severity,
            summary: SUMMARY.to_string(),
            detail: detail.into(),
            life: Some(Duration::from_millis(NOTIFICATION_LIFE_MS)),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.severity, Severity::Warn | Severity::Error)
    }
}

/// Queue of notifications waiting to be shown.
#[derive(Debug, Default)]
pub struct Notifications {
    pending: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Error => tracing::debug!(detail = %notification.detail, "error notification"),
            _ => tracing::trace!(detail = %notification.detail, "notification"),
        }
        self.pending.push(notification);
    }

    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }
}
