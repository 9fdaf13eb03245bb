//! Transient notifications
//!
//! The CRUD engine reports outcomes through a [`Notifier`], a fire-and-forget
//! sink. The desktop UI renders them as a toast stack; tests collect them in
//! a [`ToastLog`].

use aricon_core::ToastLevel;
use chrono::{DateTime, Local, TimeZone};
use std::cell::RefCell;
use uuid::Uuid;

/// How long a toast stays on screen, in milliseconds
pub const TOAST_DURATION_MS: u64 = 4_000;

/// A single notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn new(level: ToastLevel, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            title: title.into(),
            description: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, title)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach the current local time as the description
    pub fn stamped(self) -> Self {
        let now = Local::now();
        self.with_description(format_timestamp(&now))
    }
}

/// Format a moment like `19 October 2026, 03:04 PM`
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d %B %Y, %I:%M %p").to_string()
}

/// Sink for notifications
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Notifier that keeps everything it receives
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: RefCell<Vec<Toast>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of received toasts, oldest first
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    /// Titles of received toasts
    pub fn titles(&self) -> Vec<String> {
        self.toasts.borrow().iter().map(|t| t.title.clone()).collect()
    }
}

impl Notifier for ToastLog {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 15, 4, 0).unwrap();
        assert_eq!(format_timestamp(&at), "19 October 2026, 03:04 PM");
    }

    #[test]
    fn test_toast_builders() {
        let toast = Toast::warning("Hotel deleted successfully!").with_description("now");
        assert_eq!(toast.level, ToastLevel::Warning);
        assert_eq!(toast.description.as_deref(), Some("now"));
        assert!(Toast::success("x").stamped().description.is_some());
        assert_ne!(Toast::info("a").id, Toast::info("a").id);
    }

    #[test]
    fn test_log_collects_in_order() {
        let log = ToastLog::new();
        let sink: &dyn Notifier = &log;
        sink.notify(Toast::success("one"));
        (&log).notify(Toast::error("two"));
        assert_eq!(log.titles(), vec!["one".to_string(), "two".to_string()]);
    }
}
