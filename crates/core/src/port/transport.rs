// HTTP Transport Port
// Abstraction over the wire so the dispatcher can run against any HTTP
// stack and be tested without a server.

use async_trait::async_trait;
use thiserror::Error;

/// HTTP method of a gateway request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a gateway request.
///
/// `Json` is serialized by the transport with a JSON content type. `Raw`
/// is sent verbatim with no automatic encoding, used for pre-encoded form
/// payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Raw {
        bytes: Vec<u8>,
        content_type: Option<String>,
    },
}

/// One gateway request: endpoint path, query pairs, method, body.
/// Built per call, handed to the transport, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl RequestSpec {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn with_raw(mut self, bytes: Vec<u8>, content_type: Option<String>) -> Self {
        self.body = RequestBody::Raw {
            bytes,
            content_type,
        };
        self
    }
}

/// Raw reply from the transport; the body is undecoded bytes
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Failures raised by the transport itself, before any envelope existed
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("HTTP status {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    /// HTTP status tied to the failure; 0 when the request never reached
    /// the server (connect failure, timeout, bad URL).
    pub fn status(&self) -> u16 {
        match self {
            TransportError::Status { status, .. } => *status,
            _ => 0,
        }
    }
}

/// Transport trait
///
/// Implementations:
/// - ReqwestTransport: real HTTP client (infra-http crate)
/// - ScriptedTransport: canned replies for tests (mocks module)
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one request and wait for the reply.
    ///
    /// # Errors
    /// - TransportError::Connect if the server is unreachable
    /// - TransportError::Timeout if the request deadline passes
    /// - TransportError::Status for error statuses without a usable body
    async fn send(&self, spec: &RequestSpec) -> Result<TransportReply, TransportError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted transport: replays canned replies in order and records
    /// every request it sees.
    pub struct ScriptedTransport {
        replies: Mutex<VecDeque<Result<TransportReply, TransportError>>>,
        seen: Mutex<Vec<RequestSpec>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self {
                replies: Mutex::new(VecDeque::new()),
                seen: Mutex::new(Vec::new()),
            }
        }

        /// Queue a 200 reply whose body is the given JSON value
        pub fn push_json(&self, body: serde_json::Value) {
            self.push_reply(200, serde_json::to_vec(&body).unwrap());
        }

        pub fn push_reply(&self, status: u16, body: Vec<u8>) {
            self.replies
                .lock()
                .unwrap()
                .push_back(Ok(TransportReply { status, body }));
        }

        pub fn push_error(&self, err: TransportError) {
            self.replies.lock().unwrap().push_back(Err(err));
        }

        /// Requests seen so far, in arrival order
        pub fn requests(&self) -> Vec<RequestSpec> {
            self.seen.lock().unwrap().clone()
        }

        pub fn request_count(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    impl Default for ScriptedTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpTransport for ScriptedTransport {
        async fn send(&self, spec: &RequestSpec) -> Result<TransportReply, TransportError> {
            self.seen.lock().unwrap().push(spec.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| {
                    Err(TransportError::Connect(
                        "no scripted reply queued".to_string(),
                    ))
                })
        }
    }
}
