use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::pages::PageRepository;
use crate::server::handlers::{
    create_page, delete_page, list_slugs, serve_page, set_body_text, set_button_text,
    set_description, set_link,
};
use crate::server::middleware::cors::CorsMiddleware;
use crate::server::types::AppState;

/// Page API routes.
///
/// Route names are fixed by existing clients; any path they don't claim is
/// tried as a page directory.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/criarPagina", post(create_page))
        .route("/modificarTextoDoButton/{slug}/{text}", put(set_button_text))
        .route("/modificarLink/{slug}", get(set_link))
        .route("/modificarTexto/{slug}/{text}", put(set_body_text))
        .route("/modificarDescricao/{slug}/{text}", put(set_description))
        .route("/deletarPagina/{slug}", delete(delete_page))
        .route("/slugs", get(list_slugs))
        .fallback(serve_page)
        .with_state(state)
}

/// Create the full application: routes plus CORS and request tracing
pub fn create_app(repository: Arc<PageRepository>) -> Router {
    routes(AppState::new(repository))
        .layer(CorsMiddleware::allow_all())
        .layer(TraceLayer::new_for_http())
}
