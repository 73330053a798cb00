//! HTTP transport to the completion endpoint.

pub mod http;

pub use http::{HttpTransport, TransportError};
