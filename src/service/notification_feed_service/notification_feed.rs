use crate::dto::input::Notification;

///
/// In memory list of seller notifications, newest first by arrival.
///
/// The unread count is maintained as a separate counter so badge reads
/// are O(1) instead of a scan. Every mutation is idempotent with
/// respect to the notification id, repeated or out of order application
/// cannot corrupt the counter.
///
#[derive(Default)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
    unread_count: u32,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> u32 {
        self.unread_count
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.position(id).is_some()
    }

    ///
    /// Insert a pushed notification at the front of the list.
    /// No-op when a notification with the same id is already present.
    ///
    /// ### Returns
    /// true when the notification was inserted
    ///
    pub fn prepend(&mut self, notification: Notification) -> bool {
        if self.contains(notification.id) {
            return false;
        }

        if !notification.is_read {
            self.unread_count += 1;
        }
        self.notifications.insert(0, notification);

        true
    }

    ///
    /// Replace the whole list with a fresh server snapshot and
    /// recompute the unread counter from scratch. This is the ground
    /// truth reconciliation point for any optimistic drift.
    ///
    pub fn apply_refresh(&mut self, notifications: Vec<Notification>) {
        let mut deduplicated: Vec<Notification> = Vec::with_capacity(notifications.len());
        for notification in notifications {
            if !deduplicated.iter().any(|n| n.id == notification.id) {
                deduplicated.push(notification);
            }
        }

        self.unread_count = deduplicated.iter().filter(|n| !n.is_read).count() as u32;
        self.notifications = deduplicated;
    }

    ///
    /// Set the read flag of a notification, adjusting the counter
    /// only when the flag actually changes.
    ///
    /// ### Returns
    /// true when the flag was changed
    ///
    pub fn set_read(&mut self, id: i64, is_read: bool) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };

        let notification = &mut self.notifications[idx];
        if notification.is_read == is_read {
            return false;
        }

        notification.is_read = is_read;
        match is_read {
            true => self.unread_count -= 1,
            false => self.unread_count += 1,
        }

        true
    }

    ///
    /// ### Returns
    /// Position and notification, so a failed remote delete can put
    /// it back where it was
    ///
    pub fn remove(&mut self, id: i64) -> Option<(usize, Notification)> {
        let idx = self.position(id)?;

        let notification = self.notifications.remove(idx);
        if !notification.is_read {
            self.unread_count -= 1;
        }

        Some((idx, notification))
    }

    ///
    /// Put back a notification removed with [Self::remove].
    /// No-op when a notification with the same id is already present.
    ///
    pub fn insert(&mut self, idx: usize, notification: Notification) -> bool {
        if self.contains(notification.id) {
            return false;
        }

        if !notification.is_read {
            self.unread_count += 1;
        }
        let idx = idx.min(self.notifications.len());
        self.notifications.insert(idx, notification);

        true
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.notifications.iter().position(|n| n.id == id)
    }
}
