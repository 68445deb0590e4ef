use super::{dto::NotificationsList, error::Error};
use crate::{dto::output, store::dto::Notification};
use async_trait::async_trait;

///
/// Typed access to the notifications REST api.
/// Implementations neither retry nor touch local state.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsApiService: Send + Sync {
    ///
    /// Finds notifications matching the query.
    /// Notifications are sorted newest first.
    ///
    async fn find_many(&self, query: output::NotificationsQuery)
        -> Result<NotificationsList, Error>;

    async fn find_one(&self, id: &str) -> Result<Notification, Error>;

    async fn mark_as_read(&self, id: &str) -> Result<(), Error>;

    async fn mark_all_as_read(&self) -> Result<(), Error>;

    async fn delete(&self, id: &str) -> Result<(), Error>;
}
