//! REST API over the search service
//!
//! - `GET /health`
//! - `GET /query?q=<query>&field=<field>`
//! - `GET /duplicates`
//!
//! Sources are blocking, so each request builds its source and runs the
//! search on tokio's blocking pool.

mod error;
mod routes;
mod shutdown;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use client_search_core::RecordSource;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::ApiError;
pub use shutdown::shutdown_signal;
pub use state::AppState;

use crate::error::Result;

/// Builds a fresh record source for one request.
pub type SourceFactory =
    Arc<dyn Fn() -> Result<Box<dyn RecordSource + Send>> + Send + Sync + 'static>;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4567;

/// Build the router with CORS and request tracing.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    Router::new()
        .route("/health", get(routes::health))
        .route("/query", get(routes::query))
        .route("/duplicates", get(routes::duplicates))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct ApiServer {
    addr: SocketAddr,
    factory: SourceFactory,
}

impl ApiServer {
    pub fn new(factory: SourceFactory) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            factory,
        }
    }

    pub fn address(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!(
            address = %listener.local_addr()?,
            version = env!("CARGO_PKG_VERSION"),
            "client-search API listening"
        );

        let app = router(AppState::new(self.factory));
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("client-search API shutdown complete");
        Ok(())
    }
}
