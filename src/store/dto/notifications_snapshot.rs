use super::Notification;

///
/// Copy of a subset of the store taken before an optimistic mutation.
/// Passing it back to [crate::store::NotificationsStore::restore]
/// undoes the mutation for exactly these records.
///
#[derive(Debug, Clone, Default)]
pub struct NotificationsSnapshot {
    pub(crate) entries: Vec<NotificationsSnapshotEntry>,

    /// Unread notifications counted by the server but not held locally
    pub(crate) unread_outside: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct NotificationsSnapshotEntry {
    /// Index in the list at the time the snapshot was taken
    pub position: usize,
    pub notification: Notification,
}

impl NotificationsSnapshot {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(|entry| entry.notification.id.as_str())
    }
}
