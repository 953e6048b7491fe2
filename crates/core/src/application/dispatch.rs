// Request Dispatcher
// Sends one request through the transport port and turns the reply into
// a single discriminated outcome: payload, application error code, or
// transport failure. No retries, no ordering, no shared state between
// in-flight calls.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::envelope::EnvelopeConvention;
use crate::error::{DispatchError, Result};
use crate::port::transport::{HttpTransport, RequestSpec};

/// Dispatches requests and applies the envelope check.
///
/// The envelope convention is fixed at construction; a deployment speaks
/// exactly one convention and the dispatcher never guesses from the
/// response shape.
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    convention: EnvelopeConvention,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn HttpTransport>, convention: EnvelopeConvention) -> Self {
        Self {
            transport,
            convention,
        }
    }

    pub fn convention(&self) -> EnvelopeConvention {
        self.convention
    }

    /// Send one request and resolve the envelope.
    ///
    /// Exactly one outcome per call:
    /// - `Ok(payload)` when the envelope code is zero or falsy
    /// - `Err(Application)` when the server reports a non-zero code
    /// - `Err(Transport)` when the HTTP layer failed, the status was
    ///   outside 2xx, or the body was not a valid envelope
    pub async fn dispatch(&self, spec: RequestSpec) -> Result<Value> {
        debug!(
            method = %spec.method,
            endpoint = %spec.endpoint,
            "dispatching gateway request"
        );

        let reply = self.transport.send(&spec).await?;

        // Non-2xx replies never carry a trustworthy envelope, even when
        // the body happens to be JSON; they fail like any other
        // transport-level error.
        if !(200..300).contains(&reply.status) {
            warn!(
                status = reply.status,
                endpoint = %spec.endpoint,
                "gateway returned HTTP error status"
            );
            return Err(DispatchError::Transport {
                status: reply.status,
                detail: format!("HTTP status {}", reply.status),
            });
        }

        let body: Value = serde_json::from_slice(&reply.body).map_err(|e| {
            warn!(
                status = reply.status,
                endpoint = %spec.endpoint,
                "reply body is not a valid envelope"
            );
            DispatchError::Transport {
                status: reply.status,
                detail: format!("invalid envelope: {}", e),
            }
        })?;

        let envelope = self.convention.parse(body);
        if envelope.is_success() {
            Ok(envelope.payload)
        } else {
            warn!(
                code = envelope.code,
                endpoint = %spec.endpoint,
                "gateway reported application error"
            );
            Err(DispatchError::Application(envelope.code))
        }
    }
}
