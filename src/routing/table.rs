//! Named route table.
//!
//! # Responsibilities
//! - Store the ordered set of named routes
//! - Enforce name and pattern uniqueness at construction
//! - Resolve route names back to patterns for URL generation
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) reverse lookup (acceptable for typical route counts)
//! - Explicit error on duplicates rather than last-one-wins

use axum::routing::MethodRouter;
use thiserror::Error;

use crate::http::server::AppState;

/// Errors detected while assembling the route table.
///
/// These surface during startup; a running server never produces them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// Two routes share a symbolic name, making reverse lookup ambiguous.
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    /// Two routes share a path pattern, making dispatch ambiguous.
    #[error("duplicate route pattern `{0}`")]
    DuplicatePattern(String),
}

/// A single named route: a path pattern bound to a handler.
///
/// The handler is a [`MethodRouter`] resolved once at startup, so dispatch
/// never goes through a name-based lookup.
#[derive(Clone)]
pub struct Route {
    pattern: &'static str,
    handler: MethodRouter<AppState>,
    name: &'static str,
}

impl Route {
    /// Bind `handler` to `pattern` under the symbolic `name`.
    pub fn new(pattern: &'static str, handler: MethodRouter<AppState>, name: &'static str) -> Self {
        Self {
            pattern,
            handler,
            name,
        }
    }

    /// Path pattern the dispatcher matches against (e.g. `/login`).
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Symbolic name used for reverse lookup.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Handler to register with the dispatcher.
    pub fn handler(&self) -> &MethodRouter<AppState> {
        &self.handler
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("name", &self.name)
            .finish()
    }
}

/// Ordered, immutable collection of named routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from routes, preserving their order.
    ///
    /// Fails if any two routes share a name or a pattern.
    pub fn new(routes: Vec<Route>) -> Result<Self, RoutingError> {
        for (i, route) in routes.iter().enumerate() {
            for earlier in &routes[..i] {
                if earlier.name == route.name {
                    return Err(RoutingError::DuplicateName(route.name.to_string()));
                }
                if earlier.pattern == route.pattern {
                    return Err(RoutingError::DuplicatePattern(route.pattern.to_string()));
                }
            }
        }
        Ok(Self { routes })
    }

    /// Look up the pattern registered under `name`.
    ///
    /// Used for reverse URL generation; names are unique by construction.
    pub fn path_for(&self, name: &str) -> Option<&'static str> {
        self.routes
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.pattern)
    }

    /// Iterate routes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    fn route(pattern: &'static str, name: &'static str) -> Route {
        Route::new(pattern, get(|| async {}), name)
    }

    #[test]
    fn test_preserves_order() {
        let table = RouteTable::new(vec![route("/login", "login"), route("/cadastro", "cadastro")])
            .unwrap();

        let names: Vec<_> = table.iter().map(Route::name).collect();
        assert_eq!(names, ["login", "cadastro"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_path_for() {
        let table = RouteTable::new(vec![route("/login", "login"), route("/cadastro", "cadastro")])
            .unwrap();

        assert_eq!(table.path_for("login"), Some("/login"));
        assert_eq!(table.path_for("cadastro"), Some("/cadastro"));
        assert_eq!(table.path_for("unknown"), None);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::new(vec![route("/login", "login"), route("/entrar", "login")])
            .unwrap_err();

        assert_eq!(err, RoutingError::DuplicateName("login".to_string()));
    }

    #[test]
    fn test_duplicate_pattern_rejected() {
        let err = RouteTable::new(vec![route("/login", "login"), route("/login", "signin")])
            .unwrap_err();

        assert_eq!(err, RoutingError::DuplicatePattern("/login".to_string()));
    }

    #[test]
    fn test_reordering_does_not_change_lookup() {
        let forward =
            RouteTable::new(vec![route("/login", "login"), route("/cadastro", "cadastro")])
                .unwrap();
        let reversed =
            RouteTable::new(vec![route("/cadastro", "cadastro"), route("/login", "login")])
                .unwrap();

        assert_eq!(forward.path_for("login"), reversed.path_for("login"));
        assert_eq!(forward.path_for("cadastro"), reversed.path_for("cadastro"));
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.path_for("login"), None);
    }
}
