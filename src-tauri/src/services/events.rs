// Events Service
// Event sink seam between services and the Tauri runtime

use serde::Serialize;
use serde_json::Value;
use tauri::Emitter;

/// The settings file changed outside the app; payload is the
/// freshly loaded record.
pub const EVENT_SETTINGS_CHANGED: &str = "settings_changed";
/// A transient notification to show.
pub const EVENT_NOTIFICATION: &str = "notification";
/// A previously shown notification timed out.
pub const EVENT_NOTIFICATION_DISMISSED: &str = "notification_dismissed";

/// Services emit through this trait so they can run (and be tested)
/// without a webview attached.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &str, payload: Value);
}

pub fn emit_event<T: Serialize>(sink: &dyn EventSink, event: &str, payload: &T) {
    if let Ok(value) = serde_json::to_value(payload) {
        sink.emit(event, value);
    }
}

pub struct TauriEventSink<R: tauri::Runtime> {
    app_handle: tauri::AppHandle<R>,
}

impl<R: tauri::Runtime> TauriEventSink<R> {
    pub fn new(app_handle: tauri::AppHandle<R>) -> Self {
        Self { app_handle }
    }
}

impl<R: tauri::Runtime> EventSink for TauriEventSink<R> {
    fn emit(&self, event: &str, payload: Value) {
        let _ = self.app_handle.emit(event, payload);
    }
}
