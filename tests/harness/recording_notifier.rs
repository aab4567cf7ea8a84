use std::sync::{Arc, Mutex};

use blend::port::{Notification, Notifier, Severity};

/// Thread-safe notification collector for assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notifications
            .lock()
            .expect("lock recorded notifications")
            .len()
    }

    /// Titles in emission order.
    pub fn titles(&self) -> Vec<String> {
        self.notifications
            .lock()
            .expect("lock recorded notifications")
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    pub fn errors(&self) -> usize {
        self.notifications
            .lock()
            .expect("lock recorded notifications")
            .iter()
            .filter(|n| n.severity == Severity::Error)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .expect("lock recorded notifications")
            .push(notification);
    }
}
