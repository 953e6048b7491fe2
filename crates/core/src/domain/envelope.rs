// Response Envelope Parsing
// The gateway wraps every JSON response in an envelope carrying a result
// code alongside the payload. Two incompatible field conventions exist in
// deployment; which one is active is explicit configuration, never
// inferred from the response shape.

use serde_json::Value;

/// Which envelope convention the active deployment speaks.
///
/// `ResultKeyed`: code lives in a `result` field and the payload is the
/// envelope object itself (task-management gateway convention).
/// `CodeKeyed`: code lives in a `code` field and the payload is nested
/// under `res`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvelopeConvention {
    #[default]
    ResultKeyed,
    CodeKeyed,
}

/// Decoded envelope: result code plus the payload the caller consumes
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub code: i64,
    pub payload: Value,
}

impl ResponseEnvelope {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

impl EnvelopeConvention {
    /// Field the result code is read from
    pub const fn code_field(self) -> &'static str {
        match self {
            EnvelopeConvention::ResultKeyed => "result",
            EnvelopeConvention::CodeKeyed => "code",
        }
    }

    /// Decode a response body into an envelope.
    ///
    /// A falsy code field (absent, null, false, 0, empty string) means
    /// success. The server contract is to send an unambiguous `0`; the
    /// falsy rule only keeps a missing field from being misread as an
    /// application error.
    pub fn parse(self, body: Value) -> ResponseEnvelope {
        let code = coerce_code(body.get(self.code_field()));
        let payload = match self {
            EnvelopeConvention::ResultKeyed => body,
            EnvelopeConvention::CodeKeyed => body.get("res").cloned().unwrap_or(Value::Null),
        };
        ResponseEnvelope { code, payload }
    }
}

// Truthy non-numeric values cannot be looked up in a code table; they
// collapse to the generic error code 1.
fn coerce_code(value: Option<&Value>) -> i64 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(b)) => i64::from(*b),
        Some(Value::Number(n)) => n.as_i64().unwrap_or(1),
        Some(Value::String(s)) => {
            if s.is_empty() {
                0
            } else {
                s.parse().unwrap_or(1)
            }
        }
        Some(_) => 1,
    }
}
