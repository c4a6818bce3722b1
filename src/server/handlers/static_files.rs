use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use log::{debug, error};
use std::fs;
use std::path::Path as FilePath;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::server::types::AppState;

/// Serve files from a page directory for `/{slug}` and `/{slug}/...`.
///
/// The decoded first segment is resolved under the repository root, so an
/// encoded absolute path or `..` cannot reach files outside it. Requests whose
/// first segment names no page directory get the not-found response.
pub async fn serve_page(State(state): State<AppState>, req: Request) -> Response {
    let root = state.repository.root().to_path_buf();

    let Some((slug, rest)) = split_slug(req.uri()) else {
        return handle_not_found(&root);
    };
    let Some(dir) = state.repository.page_dir(&slug).filter(|dir| dir.is_dir()) else {
        return handle_not_found(&root);
    };

    let target = match req.uri().query() {
        Some(query) => format!("{}?{}", rest, query),
        None => rest,
    };
    let uri: Uri = match target.parse() {
        Ok(uri) => uri,
        Err(_) => return handle_not_found(&root),
    };

    let (mut parts, body) = req.into_parts();
    parts.uri = uri;
    let req = Request::from_parts(parts, body);

    debug!("Serving {} from page '{}'", req.uri().path(), slug);
    let serve_dir = ServeDir::new(dir).append_index_html_on_directories(true);

    match serve_dir.oneshot(req).await {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}

/// Split `/slug/rest` into the decoded slug and the remaining path (`/` when empty)
fn split_slug(uri: &Uri) -> Option<(String, String)> {
    let path = uri.path().trim_start_matches('/');
    let (segment, rest) = match path.split_once('/') {
        Some((segment, rest)) => (segment, format!("/{}", rest)),
        None => (path, "/".to_string()),
    };
    if segment.is_empty() {
        return None;
    }

    let slug = urlencoding::decode(segment).ok()?;
    Some((slug.into_owned(), rest))
}

/// Handle 404 errors with a custom error page if available
pub fn handle_not_found(root_dir: &FilePath) -> Response {
    let custom_404 = root_dir.join("404.html");
    if custom_404.is_file() {
        debug!("Using custom 404 page: {}", custom_404.display());
        match fs::read(&custom_404) {
            Ok(content) => {
                return (
                    StatusCode::NOT_FOUND,
                    [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                    content,
                )
                    .into_response();
            }
            Err(e) => {
                error!("Error reading 404.html: {}", e);
            }
        }
    }

    (StatusCode::NOT_FOUND, "Page not found").into_response()
}
