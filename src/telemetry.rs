//! User-interaction events forwarded to an analytics sink.
//!
//! Only the event shape and the sink seam live here; delivering events to an
//! analytics backend is the sink implementation's business.

use serde::{Deserialize, Serialize};
use tracing::info;

/// A custom analytics event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedEvent {
    pub category: String,
    pub action: String,
    pub name: String,
}

impl TrackedEvent {
    /// Fired when a reader opens the full contributor list.
    pub fn roster_opened() -> Self {
        Self {
            category: "see contributors".to_string(),
            action: "click".to_string(),
            name: "click".to_string(),
        }
    }
}

/// Receives tracked events. Must not block the caller.
pub trait EventSink: Send + Sync {
    fn track(&self, event: &TrackedEvent);
}

/// Sink that writes events to the application log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn track(&self, event: &TrackedEvent) {
        info!(
            category = %event.category,
            action = %event.action,
            name = %event.name,
            "Tracked event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<TrackedEvent>>,
    }

    impl EventSink for RecordingSink {
        fn track(&self, event: &TrackedEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_roster_opened_event_fields() {
        let event = TrackedEvent::roster_opened();
        assert_eq!(event.category, "see contributors");
        assert_eq!(event.action, "click");
        assert_eq!(event.name, "click");
    }

    #[test]
    fn test_sink_is_object_safe() {
        let sink = RecordingSink::default();
        let dyn_sink: &dyn EventSink = &sink;
        dyn_sink.track(&TrackedEvent::roster_opened());
        dyn_sink.track(&TrackedEvent::roster_opened());
        assert_eq!(sink.events.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_log_sink_does_not_panic() {
        LogEventSink.track(&TrackedEvent::roster_opened());
    }
}
