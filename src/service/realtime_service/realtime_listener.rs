use super::{
    dto::{RealtimeEventKind, RealtimeServiceConfig},
    error::Error,
    realtime_connector::{RealtimeConnector, RealtimeEventStream},
    realtime_normalizer,
};
use crate::{dto::input, store::SharedSessionState};
use futures::StreamExt;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Notify;

///
/// Keeps the realtime channel open for one session
/// and adds every received notification to the store.
///
pub struct RealtimeListener {
    config: Arc<RealtimeServiceConfig>,
    connector: Arc<dyn RealtimeConnector>,
    state: SharedSessionState,

    /// Session the listener was started for
    epoch: u64,
}

impl RealtimeListener {
    pub fn new(
        config: Arc<RealtimeServiceConfig>,
        connector: Arc<dyn RealtimeConnector>,
        state: SharedSessionState,
        epoch: u64,
    ) -> Self {
        Self {
            config,
            connector,
            state,
            epoch,
        }
    }

    #[tracing::instrument(name = "Realtime Listener", skip_all, fields(epoch = self.epoch))]
    pub async fn run(self, close_notify: Arc<Notify>) {
        tokio::select! {
            biased;

            // Wait for signal to close
            _ = close_notify.notified() => {
                tracing::info!("realtime listener closed");
            }

            // Keep reconnecting until attempts are exhausted
            result = self.listen() => match result {
                Ok(()) => tracing::info!("realtime listener finished"),
                Err(err) => tracing::warn!(%err, "realtime channel unavailable"),
            }
        }
    }

    async fn listen(&self) -> Result<(), Error> {
        let mut failed_attempts = 0;
        let mut delay = self.config.reconnect_delay;

        loop {
            match self.connector.connect().await {
                Ok(stream) => {
                    tracing::info!("connected to realtime channel");
                    failed_attempts = 0;
                    delay = self.config.reconnect_delay;

                    match self.consume(stream).await {
                        Ok(()) => tracing::info!("realtime stream ended"),
                        Err(err) => tracing::warn!(%err, "realtime connection lost"),
                    }
                }
                Err(err) => {
                    failed_attempts += 1;
                    tracing::warn!(%err, failed_attempts, "failed to connect to realtime channel");

                    if failed_attempts > self.config.reconnect_attempts {
                        return Err(err);
                    }
                }
            }

            if !self.state.lock().await.is_current(self.epoch) {
                return Ok(());
            }

            tracing::debug!(?delay, "reconnecting");
            tokio::time::sleep(delay).await;
            delay = (delay * 2).min(self.config.reconnect_delay_max);
        }
    }

    async fn consume(&self, mut stream: RealtimeEventStream) -> Result<(), Error> {
        while let Some(event) = stream.next().await {
            self.dispatch(event?).await;
        }

        Ok(())
    }

    async fn dispatch(&self, event: input::RealtimeEvent) {
        let Ok(kind) = event.event.parse::<RealtimeEventKind>() else {
            tracing::trace!(event = event.event, "ignoring realtime event");
            return;
        };

        let notification =
            realtime_normalizer::normalize(kind, event.data, OffsetDateTime::now_utc());
        tracing::info!(%kind, id = notification.id, "received notification");
        tracing::trace!(?notification);

        let mut state = self.state.lock().await;
        if !state.is_current(self.epoch) {
            tracing::debug!(id = notification.id, "session ended, dropping notification");
            return;
        }
        state.store.add(notification);
    }
}
