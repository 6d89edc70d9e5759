//! Page handlers for the user module.
//!
//! Cross-links between the pages go through the route table's reverse lookup
//! rather than hard-coded paths, so a pattern change in one place propagates.

use axum::extract::State;
use axum::response::Html;

use crate::http::server::AppState;

pub async fn login(State(state): State<AppState>) -> Html<String> {
    tracing::debug!(page = "login", "Rendering page");

    let cadastro = state.routes.path_for("cadastro").unwrap_or("/cadastro");
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"pt-BR\">\n\
         <head><meta charset=\"utf-8\"><title>Login</title></head>\n\
         <body>\n\
         <h1>Login</h1>\n\
         <p>Ainda n&atilde;o tem conta? <a href=\"{cadastro}\">Cadastre-se</a></p>\n\
         </body>\n\
         </html>\n"
    ))
}

pub async fn cadastro(State(state): State<AppState>) -> Html<String> {
    tracing::debug!(page = "cadastro", "Rendering page");

    let login = state.routes.path_for("login").unwrap_or("/login");
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"pt-BR\">\n\
         <head><meta charset=\"utf-8\"><title>Cadastro</title></head>\n\
         <body>\n\
         <h1>Cadastro</h1>\n\
         <p>J&aacute; tem conta? <a href=\"{login}\">Entrar</a></p>\n\
         </body>\n\
         </html>\n"
    ))
}
