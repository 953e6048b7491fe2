// Central Error Type for a Dispatched Gateway Call

use thiserror::Error;

use crate::port::transport::TransportError;

/// Outcome taxonomy for a gateway call.
///
/// `Application` means the server executed the request but reported a
/// non-zero result code in the response envelope. `Transport` means the
/// request failed at the HTTP layer, before a valid envelope existed.
/// Both terminate at the display sink when routed through the
/// `ErrorNormalizer`; neither is retried.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("gateway reported result code {0}")]
    Application(i64),

    #[error("transport failure (status {status}): {detail}")]
    Transport { status: u16, detail: String },
}

impl DispatchError {
    /// Application result code, if this is an application error
    pub fn application_code(&self) -> Option<i64> {
        match self {
            DispatchError::Application(code) => Some(*code),
            DispatchError::Transport { .. } => None,
        }
    }
}

impl From<TransportError> for DispatchError {
    fn from(err: TransportError) -> Self {
        DispatchError::Transport {
            status: err.status(),
            detail: err.to_string(),
        }
    }
}

/// Result type alias using DispatchError
pub type Result<T> = std::result::Result<T, DispatchError>;
