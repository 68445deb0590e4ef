use super::SessionService;
use crate::{
    service::{
        realtime_service::{RealtimeConnector, RealtimeListener, RealtimeServiceConfig},
        reconciliation_service::{ReconciliationService, SyncOutcome},
    },
    store::SharedSessionState,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::{
    sync::{Mutex, Notify},
    task::JoinHandle,
};

pub struct SessionServiceImpl {
    config: Arc<RealtimeServiceConfig>,
    state: SharedSessionState,
    connector: Arc<dyn RealtimeConnector>,
    reconciliation_service: Arc<dyn ReconciliationService>,

    listener: Mutex<Option<RealtimeListenerHandle>>,
}

struct RealtimeListenerHandle {
    close_notify: Arc<Notify>,
    handle: JoinHandle<()>,
}

impl RealtimeListenerHandle {
    async fn close(self) {
        self.close_notify.notify_one();
        if let Err(err) = self.handle.await {
            tracing::error!(%err, "realtime listener task failed");
        }
    }
}

impl SessionServiceImpl {
    pub fn new(
        config: Arc<RealtimeServiceConfig>,
        state: SharedSessionState,
        connector: Arc<dyn RealtimeConnector>,
        reconciliation_service: Arc<dyn ReconciliationService>,
    ) -> Self {
        Self {
            config,
            state,
            connector,
            reconciliation_service,
            listener: Mutex::new(None),
        }
    }

    fn spawn_listener(&self, epoch: u64) -> RealtimeListenerHandle {
        let listener = RealtimeListener::new(
            self.config.clone(),
            self.connector.clone(),
            self.state.clone(),
            epoch,
        );

        let close_notify = Arc::new(Notify::new());
        let handle = tokio::spawn(listener.run(close_notify.clone()));

        RealtimeListenerHandle {
            close_notify,
            handle,
        }
    }
}

#[async_trait]
impl SessionService for SessionServiceImpl {
    async fn authenticate(&self) -> SyncOutcome {
        // held until the listener of the new session is stored
        let mut listener = self.listener.lock().await;

        let epoch = {
            let mut state = self.state.lock().await;
            if state.is_authenticated() {
                tracing::debug!("session already authenticated");
                return SyncOutcome::NoOp;
            }
            state.begin()
        };
        tracing::info!(epoch, "session started");

        let previous = listener.replace(self.spawn_listener(epoch));
        drop(listener);
        if let Some(previous) = previous {
            previous.close().await;
        }

        self.reconciliation_service.refresh().await
    }

    async fn deauthenticate(&self) {
        let mut listener = self.listener.lock().await;

        {
            let mut state = self.state.lock().await;
            if !state.is_authenticated() {
                tracing::debug!("session not authenticated");
                return;
            }
            state.end();
        }
        tracing::info!("session ended");

        let previous = listener.take();
        drop(listener);
        if let Some(previous) = previous {
            previous.close().await;
        }
    }
}
