//! tally server binary.
//!
//! - Counter API: /api/counter (+ increment/decrement/reset), /api/author/
//! - SPA assets served from STATIC_DIR with index fallback
//! - Store connect retries at startup (container startup ordering)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use tally_server::{config, router, state::AppState, store::RedisStore};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_env().expect("config load failed");
    let listen: SocketAddr = cfg
        .listen
        .parse()
        .expect("listen must be a valid SocketAddr");

    // Fatal once the retry budget is exhausted.
    let store = RedisStore::connect(&cfg.store)
        .await
        .expect("store connect failed");

    let state = AppState::new(cfg, Arc::new(store));
    let app = router::build_router(state);

    tracing::info!(%listen, "tally-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
