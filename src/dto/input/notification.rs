use crate::store::dto::{self, NotificationType};
use serde::Deserialize;
use serde_json::{Map, Value};
use time::OffsetDateTime;

#[derive(Debug, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default)]
    pub read: bool,
    pub priority: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

impl From<Notification> for dto::Notification {
    fn from(value: Notification) -> Self {
        // Types added on the server before the client knows them
        // are shown as generic alerts
        let notification_type = value
            .notification_type
            .parse()
            .unwrap_or(NotificationType::Alert);
        let priority = value
            .priority
            .and_then(|priority| priority.parse().ok())
            .unwrap_or_else(|| notification_type.default_priority());

        Self {
            id: value.id,
            notification_type,
            title: value.title,
            message: value.message,
            timestamp: value.timestamp,
            read: value.read,
            priority,
            metadata: value.metadata.unwrap_or_default(),
        }
    }
}
