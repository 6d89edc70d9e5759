//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route construction (at startup):
//!     users::routes() → Vec<Route>
//!     → RouteTable::new (order preserved, names checked unique)
//!     → Freeze behind Arc, fold into the axum Router
//!
//! Incoming request:
//!     axum dispatcher matches the path against registered patterns
//!     → matched handler invoked, or the fallback (404) when nothing matches
//!
//! URL generation:
//!     RouteTable::path_for(name) → pattern
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable at runtime
//! - Handlers are values (`MethodRouter`) resolved at startup, not looked up
//!   per request
//! - Duplicate names or patterns fail construction, never panic at
//!   registration time
//! - Path matching itself belongs to the framework dispatcher

pub mod table;

pub use table::{Route, RouteTable, RoutingError};
