use crate::store::dto::{NotificationPriority, NotificationType};
use serde::Serialize;

///
/// Filters for listing notifications.
/// Unset fields are not sent at all.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// indexing starts at 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<NotificationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<NotificationPriority>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unread_only: bool,
}

impl NotificationsQuery {
    pub fn first_page(limit: u32) -> Self {
        Self {
            page: Some(1),
            limit: Some(limit),
            ..Default::default()
        }
    }
}
