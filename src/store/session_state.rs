use super::NotificationsStore;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedSessionState = Arc<Mutex<SessionState>>;

///
/// Notifications of the authenticated session together with
/// the bookkeeping needed to drop results of requests
/// that resolve after the session they were issued for has ended.
///
#[derive(Debug, Default)]
pub struct SessionState {
    pub store: NotificationsStore,

    epoch: u64,
    authenticated: bool,
    refreshes_in_flight: usize,
}

impl SessionState {
    pub fn new(store: NotificationsStore) -> Self {
        Self {
            store,
            epoch: 0,
            authenticated: false,
            refreshes_in_flight: 0,
        }
    }

    pub fn shared(self) -> SharedSessionState {
        Arc::new(Mutex::new(self))
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.refreshes_in_flight > 0
    }

    ///
    /// True when the session that issued a request at `epoch` is still active
    ///
    pub fn is_current(&self, epoch: u64) -> bool {
        self.authenticated && self.epoch == epoch
    }

    ///
    /// Starts a new session and returns its epoch
    ///
    pub fn begin(&mut self) -> u64 {
        self.epoch += 1;
        self.authenticated = true;
        self.store.clear();

        self.epoch
    }

    ///
    /// Ends current session and discards its notifications
    ///
    pub fn end(&mut self) {
        self.epoch += 1;
        self.authenticated = false;
        self.refreshes_in_flight = 0;
        self.store.clear();
    }

    pub fn begin_loading(&mut self) {
        self.refreshes_in_flight += 1;
    }

    pub fn end_loading(&mut self) {
        self.refreshes_in_flight = self.refreshes_in_flight.saturating_sub(1);
    }
}
