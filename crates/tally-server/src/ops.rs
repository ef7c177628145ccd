//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness

use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
