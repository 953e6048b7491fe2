// Error Normalizer
// Turns a dispatch outcome into a human-readable message and pushes it
// to the display sink. Terminal for every error path; never panics,
// never propagates.

use std::sync::Arc;

use tracing::debug;

use crate::domain::codes::CodeTable;
use crate::domain::message::DisplayMessage;
use crate::error::DispatchError;
use crate::port::message_sink::MessageSink;

/// Maps errors to display messages using an injected code table.
///
/// The table is immutable after construction. Deployments with different
/// code conventions get their own normalizer instance.
pub struct ErrorNormalizer {
    table: CodeTable,
    sink: Arc<dyn MessageSink>,
}

impl ErrorNormalizer {
    pub fn new(table: CodeTable, sink: Arc<dyn MessageSink>) -> Self {
        Self { table, sink }
    }

    /// Normalizer with the standard gateway code table
    pub fn with_default_table(sink: Arc<dyn MessageSink>) -> Self {
        Self::new(CodeTable::gateway_default(), sink)
    }

    /// Push the message for an error to the sink.
    ///
    /// Application codes resolve through the table, with a defined
    /// fallback for unmapped codes. Transport failures get the generic
    /// server-error message built from the HTTP status.
    pub fn normalize(&self, err: &DispatchError) {
        let body = match err {
            DispatchError::Application(code) => self.table.message_or_fallback(*code),
            DispatchError::Transport { status, .. } => {
                format!("Server returned error code: {}!", status)
            }
        };

        debug!(message = %body, "routing error to display sink");
        self.sink.show(&DisplayMessage::error(body));
    }

    /// Clear any visible message (the `show_message(false)` path)
    pub fn clear(&self) {
        self.sink.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::message_sink::mocks::{RecordingSink, SinkEvent};

    fn normalizer(sink: Arc<RecordingSink>) -> ErrorNormalizer {
        ErrorNormalizer::with_default_table(sink)
    }

    #[test]
    fn test_every_table_code_produces_its_exact_message() {
        let expected = [
            (0, "Operation succeeded!"),
            (1, "Error occurs during operation!"),
            (2, "Specified task not exist!"),
            (3, "Submitted task too large!"),
            (4, "Invalid input discovered!"),
        ];

        for (code, message) in expected {
            let sink = Arc::new(RecordingSink::new());
            normalizer(sink.clone()).normalize(&DispatchError::Application(code));
            assert_eq!(sink.shown_bodies(), vec![message.to_string()]);
        }
    }

    #[test]
    fn test_unmapped_code_produces_fallback_not_blank() {
        let sink = Arc::new(RecordingSink::new());
        normalizer(sink.clone()).normalize(&DispatchError::Application(42));

        assert_eq!(sink.shown_bodies(), vec!["Unknown error code: 42!".to_string()]);
    }

    #[test]
    fn test_transport_error_produces_generic_status_message() {
        let sink = Arc::new(RecordingSink::new());
        normalizer(sink.clone()).normalize(&DispatchError::Transport {
            status: 500,
            detail: "internal server error".to_string(),
        });

        assert_eq!(
            sink.shown_bodies(),
            vec!["Server returned error code: 500!".to_string()]
        );
    }

    #[test]
    fn test_messages_always_use_alert_class_and_error_title() {
        let sink = Arc::new(RecordingSink::new());
        let normalizer = normalizer(sink.clone());
        normalizer.normalize(&DispatchError::Application(1));
        normalizer.normalize(&DispatchError::Transport {
            status: 404,
            detail: "not found".to_string(),
        });

        for event in sink.events() {
            match event {
                SinkEvent::Shown(msg) => {
                    assert_eq!(msg.css_class, "alert-danger");
                    assert_eq!(msg.title, "Error!");
                }
                SinkEvent::Cleared => panic!("nothing should clear here"),
            }
        }
    }

    #[test]
    fn test_custom_table_is_used_over_default() {
        let sink = Arc::new(RecordingSink::new());
        let table = CodeTable::new([(2, "no such entry")]);
        ErrorNormalizer::new(table, sink.clone()).normalize(&DispatchError::Application(2));

        assert_eq!(sink.shown_bodies(), vec!["no such entry".to_string()]);
    }

    #[test]
    fn test_clear_forwards_to_sink() {
        let sink = Arc::new(RecordingSink::new());
        normalizer(sink.clone()).clear();

        assert_eq!(sink.events(), vec![SinkEvent::Cleared]);
    }
}
