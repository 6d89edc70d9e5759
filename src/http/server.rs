//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the route table and register it with the axum dispatcher
//! - Wire up middleware (tracing, limits, request ID, metrics)
//! - Provide the explicit not-found fallback
//! - Bind the server to a listener and drain on shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::request::{RequestIdExt, RequestIdLayer};
use crate::net::BoundedListener;
use crate::observability::metrics;
use crate::routing::{RouteTable, RoutingError};
use crate::users;

/// Application state injected into handlers.
///
/// The route table is shared read-only; handlers use it for reverse URL
/// lookup, never for dispatch.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// HTTP server for the user-facing service.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails when the route table is misconfigured (duplicate names or
    /// patterns); that is a startup error, not a runtime condition.
    pub fn new(config: AppConfig) -> Result<Self, RoutingError> {
        let routes = Arc::new(RouteTable::new(users::routes())?);
        let state = AppState { routes };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the axum router from the route table plus middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let mut router = Router::new();
        for route in state.routes.iter() {
            router = router.route(route.pattern(), route.handler().clone());
        }

        router
            .fallback(not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
            // outermost, so durations cover the whole stack; applies to the
            // fallback as well (labeled "none")
            .layer(middleware::from_fn(metrics::track_metrics))
    }

    /// Run the server until the shutdown signal fires.
    ///
    /// The listener is wrapped with the configured connection cap; excess
    /// clients wait in the kernel backlog until a slot frees up.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let listener = BoundedListener::new(listener, self.config.listener.max_connections);
        tracing::info!(
            address = %addr,
            max_connections = self.config.listener.max_connections,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a clone of the assembled router (used by tests to drive requests
    /// without a socket).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Explicit outcome for paths no route matches.
///
/// Metrics for this path are recorded by the tracking layer under the
/// `none` route label.
async fn not_found(request: Request) -> impl IntoResponse {
    let request_id = request
        .request_id()
        .map(|id| id.as_str().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::warn!(
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        "No route matched"
    );

    (StatusCode::NOT_FOUND, "No matching route found")
}
