//! Network I/O layer.
//! Provides the `Connector`/`Connection` seam the dispatcher talks to and the
//! blocking HTTP/1.1 implementation used in production.
pub mod http;
pub use http::{Connection, Connector, HttpConnection, HttpConnector};
