//! Integration tests for the user module's routes, driven through the full
//! middleware stack without a socket.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use usuarios_web::config::AppConfig;
use usuarios_web::http::X_REQUEST_ID;
use usuarios_web::HttpServer;

fn app() -> axum::Router {
    HttpServer::new(AppConfig::default())
        .expect("route table builds")
        .router()
}

async fn get(path: &str) -> axum::response::Response {
    app()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_login_path_selects_login_handler() {
    let response = get("/login").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("<h1>Login</h1>"));
    // Cross-link generated via reverse lookup.
    assert!(body.contains("href=\"/cadastro\""));
}

#[tokio::test]
async fn test_cadastro_path_selects_cadastro_handler() {
    let response = get("/cadastro").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("<h1>Cadastro</h1>"));
    assert!(body.contains("href=\"/login\""));
}

#[tokio::test]
async fn test_unknown_path_hits_fallback() {
    let response = get("/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("No matching route found"));
}

#[tokio::test]
async fn test_patterns_match_exactly() {
    // The table registers literal paths, not prefixes.
    assert_eq!(get("/login/extra").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get("/").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pages_are_get_only() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_client_request_id_accepted() {
    // The layer tags the request; handlers and the fallback read it from
    // extensions. A client-supplied ID must pass through the stack untouched.
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/login")
                .header(X_REQUEST_ID, "integration-test-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
