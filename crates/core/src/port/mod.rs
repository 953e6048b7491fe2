// Port Layer - Interfaces for external dependencies

pub mod message_sink;
pub mod transport;

// Re-exports
pub use message_sink::MessageSink;
pub use transport::{
    HttpTransport, Method, RequestBody, RequestSpec, TransportError, TransportReply,
};
