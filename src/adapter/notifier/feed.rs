//! In-memory notification feed, newest first.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::port::{Notification, Notifier};

/// Bounded list of recent notifications, most recent at the front.
///
/// Cloning yields another handle to the same feed, so one clone can be
/// registered as a notifier while another is read by the presentation layer.
#[derive(Clone)]
pub struct NotificationFeed {
    inner: Arc<Mutex<VecDeque<Notification>>>,
    capacity: usize,
}

impl NotificationFeed {
    /// Create a feed that keeps at most `capacity` notifications.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Copy of the feed, newest first.
    #[must_use]
    pub fn recent(&self) -> Vec<Notification> {
        self.inner.lock().iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Notifier for NotificationFeed {
    fn notify(&self, notification: Notification) {
        if self.capacity == 0 {
            return;
        }
        let mut feed = self.inner.lock();
        feed.push_front(notification);
        feed.truncate(self.capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::Event;

    #[test]
    fn newest_notification_comes_first() {
        let feed = NotificationFeed::new(10);
        feed.notify(Notification::new(Event::WalletConnected {
            account: "0xabc".into(),
        }));
        feed.notify(Notification::new(Event::WalletDisconnected));

        let recent = feed.recent();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].title, "Wallet Disconnected");
    }

    #[test]
    fn capacity_drops_oldest() {
        let feed = NotificationFeed::new(2);
        for _ in 0..3 {
            feed.notify(Notification::new(Event::WalletDisconnected));
        }
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn clones_share_storage() {
        let feed = NotificationFeed::new(5);
        let registered = feed.clone();
        registered.notify(Notification::new(Event::WalletDisconnected));

        assert_eq!(feed.len(), 1);
        assert!(!registered.is_empty());
    }
}
