use super::dto::SyncOutcome;
use async_trait::async_trait;

///
/// User actions on notifications.
///
/// Every action is applied to the local store before the backend is called.
/// Backend failures are logged and compensated, they are never returned.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReconciliationService: Send + Sync {
    ///
    /// Replaces local notifications with the first page from the backend
    ///
    async fn refresh(&self) -> SyncOutcome;

    ///
    /// Rolled back when the backend call fails
    ///
    async fn mark_as_read(&self, id: &str) -> SyncOutcome;

    ///
    /// Rolled back and refreshed when the backend call fails
    ///
    async fn mark_all_as_read(&self) -> SyncOutcome;

    ///
    /// Rolled back when the backend call fails
    ///
    async fn remove(&self, id: &str) -> SyncOutcome;

    ///
    /// Deletes every notification one by one.
    /// Refreshed when any of the deletes fails.
    ///
    async fn clear_all(&self) -> SyncOutcome;
}
