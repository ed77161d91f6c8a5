//! API server setup and lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use super::config::ServerConfig;
use super::handlers::{self, AppState};
use super::middleware::RequestLogLayer;
use crate::storage::TableStore;

/// HTTP server for the ladrilleria API.
pub struct ApiServer {
    config: ServerConfig,
    router: Router,
}

impl ApiServer {
    /// Creates a server over the given table store.
    pub fn new(config: ServerConfig, table: Arc<dyn TableStore>) -> Self {
        let router = build_router(table);
        Self { config, router }
    }

    /// Returns the router, for driving requests directly in tests.
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds the listen address and serves requests until the process exits.
    pub async fn serve(self) -> std::io::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "ladrilleria server listening");
        axum::serve(listener, self.router).await
    }
}

/// Builds the route table with CORS and request logging applied.
///
/// Both POST routes share one handler since pedidos and contactos go through
/// the identical create flow against the shared table. Unmatched paths fall
/// through to axum's default 404.
pub fn build_router(table: Arc<dyn TableStore>) -> Router {
    let state = AppState { table };

    // All origins; methods and headers limited per the published CORS policy.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/api/pedidos", post(handlers::handle_create))
        .route(
            "/api/contactos",
            get(handlers::handle_list).post(handlers::handle_create),
        )
        .layer(cors)
        .layer(RequestLogLayer::new())
        .with_state(state)
}
