use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// CORS policy for the page API
pub struct CorsMiddleware;

impl CorsMiddleware {
    /// Any origin may call the API with the methods and headers page
    /// editors use
    pub fn allow_all() -> CorsLayer {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    }
}
