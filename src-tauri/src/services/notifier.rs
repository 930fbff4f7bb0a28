// Notifier Service
// Transient notifications with a fixed auto-dismiss delay

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde_json::json;

use crate::models::{Notification, NotificationKind};
use crate::services::events::{
    emit_event, EventSink, EVENT_NOTIFICATION, EVENT_NOTIFICATION_DISMISSED,
};

/// How long a notification stays on screen before the dismiss event.
const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Clone)]
pub struct Notifier {
    sink: Arc<dyn EventSink>,
}

impl Notifier {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }

    pub fn success(&self, message: &str) {
        self.notify(NotificationKind::Success, message);
    }

    pub fn error(&self, message: &str) {
        self.notify(NotificationKind::Error, message);
    }

    pub fn info(&self, message: &str) {
        self.notify(NotificationKind::Info, message);
    }

    /// Emit a notification and schedule its dismissal. Fire and
    /// forget: the dismiss timer has no failure mode the app cares
    /// about.
    pub fn notify(&self, kind: NotificationKind, message: &str) {
        let notification = Notification::new(kind, message);
        emit_event(self.sink.as_ref(), EVENT_NOTIFICATION, &notification);

        let sink = Arc::clone(&self.sink);
        let id = notification.id;
        thread::spawn(move || {
            thread::sleep(DISMISS_AFTER);
            emit_event(
                sink.as_ref(),
                EVENT_NOTIFICATION_DISMISSED,
                &json!({ "id": id }),
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::sync::Mutex;

    struct RecordingSink {
        events: Mutex<Vec<(String, Value)>>,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                events: Mutex::new(Vec::new()),
            })
        }
    }

    impl EventSink for RecordingSink {
        fn emit(&self, event: &str, payload: Value) {
            self.events
                .lock()
                .unwrap()
                .push((event.to_string(), payload));
        }
    }

    #[test]
    fn test_notify_emits_immediately() {
        let sink = RecordingSink::new();
        let notifier = Notifier::new(sink.clone());

        notifier.error("Failed to save settings");

        let events = sink.events.lock().unwrap();
        let (event, payload) = &events[0];
        assert_eq!(event, EVENT_NOTIFICATION);
        assert_eq!(payload["kind"], "error");
        assert_eq!(payload["message"], "Failed to save settings");
        assert!(payload["id"].as_str().is_some());
    }

    #[test]
    fn test_kinds_serialize_lowercase() {
        let sink = RecordingSink::new();
        let notifier = Notifier::new(sink.clone());

        notifier.success("saved");
        notifier.info("reset");

        let events = sink.events.lock().unwrap();
        assert_eq!(events[0].1["kind"], "success");
        assert_eq!(events[1].1["kind"], "info");
    }
}
