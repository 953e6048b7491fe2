// Message Sink Port
// The display surface errors terminate at. The web UI renders an alert
// box; the CLI prints to the terminal; tests record.

use crate::domain::message::DisplayMessage;

/// Display sink trait
pub trait MessageSink: Send + Sync {
    /// Render a message
    fn show(&self, message: &DisplayMessage);

    /// Remove any currently visible message
    fn clear(&self);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// Everything a sink was asked to do, in order
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SinkEvent {
        Shown(DisplayMessage),
        Cleared,
    }

    /// Recording sink for asserting on display behavior
    pub struct RecordingSink {
        events: Mutex<Vec<SinkEvent>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        pub fn events(&self) -> Vec<SinkEvent> {
            self.events.lock().unwrap().clone()
        }

        /// Bodies of shown messages, in order
        pub fn shown_bodies(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    SinkEvent::Shown(msg) => Some(msg.body),
                    SinkEvent::Cleared => None,
                })
                .collect()
        }

        pub fn is_empty(&self) -> bool {
            self.events.lock().unwrap().is_empty()
        }
    }

    impl Default for RecordingSink {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MessageSink for RecordingSink {
        fn show(&self, message: &DisplayMessage) {
            self.events
                .lock()
                .unwrap()
                .push(SinkEvent::Shown(message.clone()));
        }

        fn clear(&self) {
            self.events.lock().unwrap().push(SinkEvent::Cleared);
        }
    }
}
