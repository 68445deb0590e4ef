use super::NotificationPriority;
use serde::Serialize;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationType {
    Notice,
    Event,
    Announcement,
    Alert,
}

impl NotificationType {
    ///
    /// Priority used when neither the push payload
    /// nor the server record carries one
    ///
    pub fn default_priority(self) -> NotificationPriority {
        match self {
            NotificationType::Notice | NotificationType::Event => NotificationPriority::Medium,
            NotificationType::Announcement | NotificationType::Alert => NotificationPriority::High,
        }
    }
}
