use super::dto::{Notification, NotificationsSnapshot, NotificationsSnapshotEntry};
use std::collections::VecDeque;

/// Maximum number of notifications kept in memory
pub const MAX_NOTIFICATIONS: usize = 50;

///
/// In-memory notification list of a single session.
///
/// Notifications are ordered newest first. Every operation keeps
/// the list within capacity and never lets the unread counter go negative.
///
#[derive(Debug)]
pub struct NotificationsStore {
    capacity: usize,
    notifications: VecDeque<Notification>,
    unread_count: usize,
}

impl Default for NotificationsStore {
    fn default() -> Self {
        Self::with_capacity(MAX_NOTIFICATIONS)
    }
}

impl NotificationsStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            notifications: VecDeque::with_capacity(capacity),
            unread_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn unread(&self) -> impl Iterator<Item = &Notification> {
        self.notifications
            .iter()
            .filter(|notification| !notification.read)
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.notifications
            .iter()
            .find(|notification| notification.id == id)
    }

    ///
    /// Puts notification at the front of the list.
    /// An entry with the same id is replaced, entries past capacity are evicted.
    /// Counter grows only for unread notifications, pushed ones are always unread.
    ///
    pub fn add(&mut self, notification: Notification) {
        if self.remove(&notification.id).is_some() {
            tracing::trace!(id = notification.id, "replacing notification");
        }

        if !notification.read {
            self.unread_count += 1;
        }
        self.notifications.push_front(notification);

        self.evict_overflow();
    }

    ///
    /// Returns true if notification existed and was unread
    ///
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|notification| notification.id == id)
        else {
            return false;
        };

        if notification.read {
            return false;
        }

        notification.read = true;
        self.unread_count = self.unread_count.saturating_sub(1);

        true
    }

    ///
    /// Returns number of notifications that changed state
    ///
    pub fn mark_all_as_read(&mut self) -> usize {
        let mut marked = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            marked += 1;
        }
        self.unread_count = 0;

        marked
    }

    pub fn remove(&mut self, id: &str) -> Option<Notification> {
        let position = self.position(id)?;
        let notification = self.notifications.remove(position)?;

        if !notification.read {
            self.unread_count = self.unread_count.saturating_sub(1);
        }

        Some(notification)
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
        self.unread_count = 0;
    }

    ///
    /// Replaces whole state with the one reported by the server.
    /// The server counts unread notifications across all pages,
    /// so `unread_count` is taken as is.
    ///
    pub fn replace(&mut self, notifications: Vec<Notification>, unread_count: usize) {
        self.notifications.clear();

        for notification in notifications {
            if self.notifications.len() == self.capacity {
                break;
            }
            if self.position(&notification.id).is_some() {
                tracing::debug!(id = notification.id, "skipping duplicated notification");
                continue;
            }
            self.notifications.push_back(notification);
        }

        self.unread_count = unread_count;
    }

    ///
    /// Captures notifications matching predicate together with their positions
    ///
    pub fn snapshot<P>(&self, predicate: P) -> NotificationsSnapshot
    where
        P: Fn(&Notification) -> bool,
    {
        let entries = self
            .notifications
            .iter()
            .enumerate()
            .filter(|(_, notification)| predicate(notification))
            .map(|(position, notification)| NotificationsSnapshotEntry {
                position,
                notification: notification.clone(),
            })
            .collect();

        NotificationsSnapshot {
            entries,
            unread_outside: self.unread_count.saturating_sub(self.unread().count()),
        }
    }

    ///
    /// Brings back captured notifications.
    ///
    /// Notifications still present are overwritten with the captured version,
    /// missing ones are inserted at their previous position.
    /// Notifications added after the snapshot was taken are left in place.
    /// Unread notifications the server reported beyond the local list
    /// are counted again.
    ///
    pub fn restore(&mut self, snapshot: NotificationsSnapshot) {
        let unread_outside = snapshot.unread_outside;
        let mut entries = snapshot.entries;
        entries.sort_by_key(|entry| entry.position);

        for NotificationsSnapshotEntry {
            position,
            notification,
        } in entries
        {
            match self.position(&notification.id) {
                Some(current_position) => {
                    let current = &mut self.notifications[current_position];
                    match (current.read, notification.read) {
                        (true, false) => self.unread_count += 1,
                        (false, true) => {
                            self.unread_count = self.unread_count.saturating_sub(1)
                        }
                        _ => {}
                    }
                    *current = notification;
                }
                None => {
                    if !notification.read {
                        self.unread_count += 1;
                    }
                    let position = position.min(self.notifications.len());
                    self.notifications.insert(position, notification);
                }
            }
        }

        self.evict_overflow();

        let unread_count = self.unread().count() + unread_outside;
        self.unread_count = self.unread_count.max(unread_count);
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notifications
            .iter()
            .position(|notification| notification.id == id)
    }

    fn evict_overflow(&mut self) {
        while self.notifications.len() > self.capacity {
            if let Some(evicted) = self.notifications.pop_back() {
                tracing::trace!(id = evicted.id, "evicting notification");
                if !evicted.read {
                    self.unread_count = self.unread_count.saturating_sub(1);
                }
            }
        }
    }
}
