//! Static frontend asset serving
//!
//! Everything outside /api and /healthz falls through to this handler. The
//! extension-to-content-type table is fixed; unknown extensions download as
//! octet-stream. The root path serves the default document.

use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

const DEFAULT_DOCUMENT: &str = "index.html";

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Resolve a request path inside the document root, rejecting traversal
fn resolve(root: &Path, uri_path: &str) -> Option<PathBuf> {
    let trimmed = uri_path.trim_start_matches('/');
    let relative = if trimmed.is_empty() {
        DEFAULT_DOCUMENT
    } else {
        trimmed
    };

    let candidate = Path::new(relative);
    if candidate
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    Some(root.join(candidate))
}

/// Serve a file from the document root, or a plain-text 404
pub async fn serve(root: &Path, uri: &Uri) -> Response {
    let Some(file_path) = resolve(root, uri.path()) else {
        return not_found();
    };

    match tokio::fs::read(&file_path).await {
        Ok(bytes) => {
            let content_type = content_type_for(&file_path);
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(_) => {
            debug!("Static file not found: {}", file_path.display());
            not_found()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}
