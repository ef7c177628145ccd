//! Static asset + SPA fallback handler.
//!
//! Anything outside `/api` resolves against the configured static directory:
//! an existing file is served as-is, everything else falls back to
//! `index.html` so client-side routing works. A missing `index.html` is 404.

use std::path::Path;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

pub async fn serve(State(state): State<AppState>, uri: Uri) -> Response {
    let static_dir = Path::new(&state.cfg().spa.static_dir);
    let rel = uri.path().trim_start_matches('/');

    if !rel.is_empty() && is_safe(rel) {
        let path = static_dir.join(rel);
        if let Ok(bytes) = tokio::fs::read(&path).await {
            return asset_response(content_type_for(&path), bytes);
        }
    }

    let index = static_dir.join("index.html");
    match tokio::fs::read(&index).await {
        Ok(bytes) => asset_response("text/html; charset=utf-8", bytes),
        Err(_) => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

fn asset_response(content_type: &'static str, bytes: Vec<u8>) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], bytes).into_response()
}

/// Reject empty segments and `..` so a request path can never escape the
/// static directory.
fn is_safe(rel: &str) -> bool {
    rel.split('/').all(|seg| !seg.is_empty() && seg != "..")
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config;
    use crate::store::MemoryStore;

    fn state_for(static_dir: &Path) -> AppState {
        let dir = static_dir.to_string_lossy().into_owned();
        let cfg = config::load_from_lookup(|name| {
            (name == "STATIC_DIR").then(|| dir.clone())
        })
        .unwrap();
        AppState::new(cfg, Arc::new(MemoryStore::new()))
    }

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("tally-spa-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn missing_index_yields_404() {
        let dir = temp_dir("empty");
        let st = state_for(&dir);

        let resp = serve(State(st), "/whatever".parse().unwrap()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serves_assets_and_falls_back_to_index() {
        let dir = temp_dir("assets");
        std::fs::write(dir.join("index.html"), "<html>app</html>").unwrap();
        std::fs::write(dir.join("app.js"), "console.log(1)").unwrap();
        let st = state_for(&dir);

        let resp = serve(State(st.clone()), "/app.js".parse().unwrap()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/javascript"
        );

        // unknown client-side route falls back to the SPA index
        let resp = serve(State(st), "/some/client/route".parse().unwrap()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn traversal_segments_are_rejected() {
        assert!(!is_safe("../etc/passwd"));
        assert!(!is_safe("assets/../../secret"));
        assert!(!is_safe("assets//x"));
        assert!(is_safe("assets/app.js"));
        assert!(is_safe("favicon.ico"));
    }

    #[test]
    fn content_types_cover_spa_assets() {
        assert_eq!(content_type_for(Path::new("app.js")), "text/javascript");
        assert_eq!(content_type_for(Path::new("x/y.css")), "text/css");
        assert_eq!(
            content_type_for(Path::new("unknown.bin")),
            "application/octet-stream"
        );
    }
}
