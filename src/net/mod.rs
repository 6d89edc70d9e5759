//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (accept loop, connection cap)
//!     → Hand off to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Bounded accept prevents resource exhaustion; excess clients wait in the
//!   kernel backlog instead of piling tasks onto the runtime
//! - The slot travels with the connection and is released when it closes

pub mod listener;

pub use listener::BoundedListener;
