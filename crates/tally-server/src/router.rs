//! Axum router wiring.
//!
//! Counter, author, and SPA routes sit behind the ensure-counter layer (the
//! counter key is initialized on every incoming request). `/healthz` is
//! registered outside the layer so liveness never depends on the store.
//! Permissive CORS wraps the whole app so a frontend served from another
//! origin (e.g. a dev server on its own port) can call the API.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::{api, ops, spa, state::AppState};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/counter", get(api::counter::read))
        .route("/api/counter/increment", post(api::counter::increment))
        .route("/api/counter/decrement", post(api::counter::decrement))
        .route("/api/counter/reset", post(api::counter::reset))
        // both spellings; the bare one must never fall through to the SPA
        .route("/api/author", get(api::author::author))
        .route("/api/author/", get(api::author::author))
        .fallback(spa::serve)
        .layer(middleware::from_fn_with_state(state.clone(), api::ensure_counter))
        .route("/healthz", get(ops::healthz))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
