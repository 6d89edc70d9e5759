//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → shutdown_signal resolves
//!
//! Shutdown (shutdown.rs):
//!     Shutdown::listen_for_signals wires the above to trigger
//!     Shutdown::trigger → broadcast to subscribers
//!     → server stops accepting, drains, exits
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
