//! User-facing web service exposing the login and signup pages.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;
pub mod users;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
