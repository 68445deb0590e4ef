use crate::service::reconciliation_service::SyncOutcome;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionService: Send + Sync {
    ///
    /// Starts listening for pushed notifications and loads the current ones.
    /// Returns how the initial refresh settled,
    /// [SyncOutcome::NoOp] when the session is already authenticated.
    ///
    async fn authenticate(&self) -> SyncOutcome;

    ///
    /// Stops listening and discards all local notifications.
    /// Requests still in flight are ignored when they resolve.
    ///
    async fn deauthenticate(&self);
}
