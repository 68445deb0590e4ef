use super::{dto::SyncOutcome, ReconciliationService};
use crate::{
    dto::output,
    service::notifications_api_service::NotificationsApiService,
    store::{dto::NotificationsSnapshot, SharedSessionState},
};
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;

pub struct ReconciliationServiceImpl {
    state: SharedSessionState,
    api_service: Arc<dyn NotificationsApiService>,
}

impl ReconciliationServiceImpl {
    pub fn new(state: SharedSessionState, api_service: Arc<dyn NotificationsApiService>) -> Self {
        Self { state, api_service }
    }

    async fn rollback(&self, epoch: u64, snapshot: NotificationsSnapshot) -> SyncOutcome {
        let mut state = self.state.lock().await;
        if !state.is_current(epoch) {
            tracing::debug!("session changed, skipping rollback");
            return SyncOutcome::Stale;
        }

        tracing::info!(count = snapshot.len(), "rolling back notifications");
        tracing::debug!(ids = ?snapshot.ids().collect::<Vec<_>>());
        state.store.restore(snapshot);

        SyncOutcome::RolledBack
    }

    ///
    /// Refresh used to recover from a failed action.
    /// `fallback` is returned when the refresh fails as well.
    ///
    async fn resynchronize(&self, epoch: u64, fallback: SyncOutcome) -> SyncOutcome {
        if !self.state.lock().await.is_current(epoch) {
            return SyncOutcome::Stale;
        }

        match self.refresh().await {
            SyncOutcome::Applied => SyncOutcome::Resynchronized,
            SyncOutcome::Failed => fallback,
            _ => SyncOutcome::Stale,
        }
    }
}

#[async_trait]
impl ReconciliationService for ReconciliationServiceImpl {
    #[tracing::instrument(name = "Refresh", skip_all)]
    async fn refresh(&self) -> SyncOutcome {
        let (epoch, limit) = {
            let mut state = self.state.lock().await;
            if !state.is_authenticated() {
                tracing::debug!("not authenticated, skipping refresh");
                return SyncOutcome::NoOp;
            }
            state.begin_loading();

            (state.epoch(), state.store.capacity())
        };

        let query = output::NotificationsQuery::first_page(u32::try_from(limit).unwrap_or(u32::MAX));
        let result = self.api_service.find_many(query).await;

        let mut state = self.state.lock().await;
        if !state.is_current(epoch) {
            tracing::debug!("session changed, dropping refreshed notifications");
            return SyncOutcome::Stale;
        }
        state.end_loading();

        match result {
            Ok(list) => {
                tracing::info!(
                    count = list.notifications.len(),
                    unread_count = list.unread_count,
                    "refreshed notifications"
                );
                let unread_count = usize::try_from(list.unread_count).unwrap_or(usize::MAX);
                state.store.replace(list.notifications, unread_count);

                SyncOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(%err, "failed to refresh notifications");
                SyncOutcome::Failed
            }
        }
    }

    #[tracing::instrument(name = "Mark As Read", skip(self))]
    async fn mark_as_read(&self, id: &str) -> SyncOutcome {
        let (epoch, snapshot) = {
            let mut state = self.state.lock().await;
            if !state.is_authenticated() {
                return SyncOutcome::NoOp;
            }

            let snapshot = state.store.snapshot(|notification| notification.id == id);
            if !state.store.mark_as_read(id) {
                tracing::debug!("notification unknown or already read");
                return SyncOutcome::NoOp;
            }

            (state.epoch(), snapshot)
        };

        match self.api_service.mark_as_read(id).await {
            Ok(()) => {
                tracing::info!("marked notification as read");
                SyncOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(%err, "failed to mark notification as read");
                self.rollback(epoch, snapshot).await
            }
        }
    }

    #[tracing::instrument(name = "Mark All As Read", skip_all)]
    async fn mark_all_as_read(&self) -> SyncOutcome {
        let (epoch, snapshot) = {
            let mut state = self.state.lock().await;
            if !state.is_authenticated() {
                return SyncOutcome::NoOp;
            }

            let snapshot = state.store.snapshot(|notification| !notification.read);
            if snapshot.is_empty() && state.store.unread_count() == 0 {
                tracing::debug!("no unread notifications");
                return SyncOutcome::NoOp;
            }
            state.store.mark_all_as_read();

            (state.epoch(), snapshot)
        };

        match self.api_service.mark_all_as_read().await {
            Ok(()) => {
                tracing::info!("marked all notifications as read");
                SyncOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(%err, "failed to mark all notifications as read");
                match self.rollback(epoch, snapshot).await {
                    SyncOutcome::RolledBack => {
                        self.resynchronize(epoch, SyncOutcome::RolledBack).await
                    }
                    outcome => outcome,
                }
            }
        }
    }

    #[tracing::instrument(name = "Remove", skip(self))]
    async fn remove(&self, id: &str) -> SyncOutcome {
        let (epoch, snapshot) = {
            let mut state = self.state.lock().await;
            if !state.is_authenticated() {
                return SyncOutcome::NoOp;
            }

            let snapshot = state.store.snapshot(|notification| notification.id == id);
            if state.store.remove(id).is_none() {
                tracing::debug!("notification unknown");
                return SyncOutcome::NoOp;
            }

            (state.epoch(), snapshot)
        };

        match self.api_service.delete(id).await {
            Ok(()) => {
                tracing::info!("deleted notification");
                SyncOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(%err, "failed to delete notification");
                self.rollback(epoch, snapshot).await
            }
        }
    }

    #[tracing::instrument(name = "Clear All", skip_all)]
    async fn clear_all(&self) -> SyncOutcome {
        let (epoch, ids) = {
            let mut state = self.state.lock().await;
            if !state.is_authenticated() {
                return SyncOutcome::NoOp;
            }

            let ids = state
                .store
                .iter()
                .map(|notification| notification.id.clone())
                .collect::<Vec<_>>();
            if ids.is_empty() {
                return SyncOutcome::NoOp;
            }
            state.store.clear();

            (state.epoch(), ids)
        };

        // Backend has no batch delete, so a part of the deletes may succeed
        let results = join_all(ids.iter().map(|id| self.api_service.delete(id))).await;

        let mut failed = 0;
        for (id, result) in ids.iter().zip(results) {
            if let Err(err) = result {
                failed += 1;
                tracing::warn!(id, %err, "failed to delete notification");
            }
        }

        if failed == 0 {
            tracing::info!(count = ids.len(), "cleared notifications");
            return SyncOutcome::Applied;
        }

        tracing::warn!(failed, total = ids.len(), "clearing notifications failed");
        self.resynchronize(epoch, SyncOutcome::Failed).await
    }
}
