use super::{NotificationPriority, NotificationType};
use serde_json::{Map, Value};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub timestamp: OffsetDateTime,
    pub read: bool,
    pub priority: NotificationPriority,

    /// Navigation hints and every field of the source payload
    pub metadata: Map<String, Value>,
}

impl Notification {
    ///
    /// Location the user should be taken to after opening the notification.
    /// An explicit `link` in metadata wins over type based routes.
    ///
    pub fn navigation_target(&self) -> Option<String> {
        if let Some(link) = self.metadata_string("link") {
            return Some(link);
        }

        match self.notification_type {
            NotificationType::Notice => Some(
                self.metadata_string("noticeId")
                    .map(|id| format!("/notices/{id}"))
                    .unwrap_or_else(|| "/notices/list".to_string()),
            ),
            NotificationType::Event => Some(
                self.metadata_string("eventId")
                    .map(|id| format!("/events/{id}"))
                    .unwrap_or_else(|| "/events/list".to_string()),
            ),
            NotificationType::Announcement | NotificationType::Alert => None,
        }
    }

    ///
    /// Human readable age of the notification, e.g. `5m ago`.
    /// Notifications older than a week are shown as a calendar date.
    ///
    pub fn relative_time(&self, now: OffsetDateTime) -> String {
        let age = now - self.timestamp;

        let minutes = age.whole_minutes();
        let hours = age.whole_hours();
        let days = age.whole_days();

        if minutes < 1 {
            "Just now".to_string()
        } else if minutes < 60 {
            format!("{minutes}m ago")
        } else if hours < 24 {
            format!("{hours}h ago")
        } else if days < 7 {
            format!("{days}d ago")
        } else {
            self.timestamp.date().to_string()
        }
    }

    fn metadata_string(&self, key: &str) -> Option<String> {
        match self.metadata.get(key)? {
            Value::String(value) if !value.is_empty() => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            _ => None,
        }
    }
}
