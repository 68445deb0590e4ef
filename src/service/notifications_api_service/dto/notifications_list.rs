use crate::{dto::input, store::dto::Notification};

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationsList {
    pub notifications: Vec<Notification>,
    pub total_count: u64,

    /// Unread notifications across all pages
    pub unread_count: u64,
}

impl From<input::NotificationsPage> for NotificationsList {
    fn from(value: input::NotificationsPage) -> Self {
        Self {
            notifications: value.data.into_iter().map(Notification::from).collect(),
            total_count: value.total_count,
            unread_count: value.unread_count,
        }
    }
}
