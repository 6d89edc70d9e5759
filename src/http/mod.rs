//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware stack)
//!     → request.rs (request ID tagging)
//!     → dispatcher matches the route table
//!     → matched handler renders the page, or fallback returns 404
//! ```

pub mod request;
pub mod server;

pub use request::{RequestId, RequestIdExt, RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
