//! Request identity.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4)
//! - Respect an incoming `x-request-id` header if the client sent one
//! - Make the ID available to handlers via a request extension
//!
//! # Design Decisions
//! - ID is attached as early as possible so every log line can carry it
//! - Stored as a string: incoming IDs are opaque, not necessarily UUIDs

use std::task::{Context, Poll};

use axum::http::{HeaderValue, Request};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Identifier assigned to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accessor for the request ID stored in request extensions.
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&RequestId>;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> Option<&RequestId> {
        self.extensions().get::<RequestId>()
    }
}

/// Layer that tags every request with a [`RequestId`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = SetRequestId<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SetRequestId { inner }
    }
}

/// Service produced by [`RequestIdLayer`].
#[derive(Debug, Clone)]
pub struct SetRequestId<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for SetRequestId<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let id = match req
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
        {
            Some(existing) => RequestId(existing.to_string()),
            None => {
                let generated = Uuid::new_v4().to_string();
                if let Ok(value) = HeaderValue::try_from(generated.as_str()) {
                    req.headers_mut().insert(X_REQUEST_ID, value);
                }
                RequestId(generated)
            }
        };
        req.extensions_mut().insert(id);
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use std::convert::Infallible;
    use tower::{service_fn, ServiceExt};

    async fn echo(req: Request<Body>) -> Result<Request<Body>, Infallible> {
        Ok(req)
    }

    #[tokio::test]
    async fn test_generates_id_when_absent() {
        let svc = RequestIdLayer.layer(service_fn(echo));
        let req = Request::builder().body(Body::empty()).unwrap();

        let seen = svc.oneshot(req).await.unwrap();

        let id = seen.request_id().expect("extension set");
        let header = seen.headers().get(X_REQUEST_ID).unwrap().to_str().unwrap();
        assert_eq!(id.as_str(), header);
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[tokio::test]
    async fn test_preserves_existing_id() {
        let svc = RequestIdLayer.layer(service_fn(echo));
        let req = Request::builder()
            .header(X_REQUEST_ID, "client-supplied-42")
            .body(Body::empty())
            .unwrap();

        let seen = svc.oneshot(req).await.unwrap();

        assert_eq!(seen.request_id().unwrap().as_str(), "client-supplied-42");
        assert_eq!(
            seen.headers().get(X_REQUEST_ID).unwrap(),
            "client-supplied-42"
        );
    }
}
