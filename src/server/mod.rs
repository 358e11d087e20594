pub mod handlers;
mod types;

pub use types::*;

use crate::{config::Config, gateway::HttpUpstream, Result};
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/proxy", get(handlers::proxy_get).post(handlers::proxy_post))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let upstream = HttpUpstream::new(&config.upstream)?;
    info!("Relaying to upstream {}", upstream.base_url());

    let app = router(
        AppState {
            upstream: Arc::new(upstream),
        },
        config.server.max_body_bytes,
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
