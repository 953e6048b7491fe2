// Taskgate Infrastructure - HTTP Adapter
// Implements: HttpTransport (reqwest)

pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
