use std::sync::Mutex;

use async_trait::async_trait;

use crate::service::notification::Notifier;


/// Test double that records every dispatched message instead of sending it.
///
/// `failing()` builds a notifier whose sends all report failure, for
/// verifying that lifecycle transitions survive a dead messaging service.
pub struct RecordingNotifier {
    sent: Mutex<Vec<(i64, String)>>,
    succeed: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            succeed: true,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            succeed: false,
        }
    }

    /// Messages dispatched so far, as `(chat_id, text)` pairs in order.
    pub fn messages(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, chat_id: i64, text: &str) -> bool {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        self.succeed
    }
}
