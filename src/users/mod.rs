//! User module: URL configuration and page handlers.
//!
//! The module contributes two named routes to the application's route table:
//! `login` at `/login` and `cadastro` at `/cadastro`. The names are what the
//! rest of the application uses to generate URLs; the patterns are what the
//! dispatcher matches.

pub mod handlers;

use axum::routing::get;

use crate::routing::Route;

/// Routes exposed by the user module, in registration order.
pub fn routes() -> Vec<Route> {
    vec![
        Route::new("/login", get(handlers::login), "login"),
        Route::new("/cadastro", get(handlers::cadastro), "cadastro"),
    ]
}
