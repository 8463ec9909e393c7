//! # HTTP Server
//!
//! Axum-based HTTP server for the catalog API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::CatalogApi;
use crate::docs::ApiDoc;
use crate::observability::Logger;
use crate::store::RecordStore;

use super::config::ServiceConfig;
use super::routes::{api_routes, operation_docs, AppState};
use super::write_gate::WriteGate;

/// HTTP server for the catalog API
pub struct HttpServer {
    config: ServiceConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given record store
    pub fn new(store: Arc<dyn RecordStore>, config: ServiceConfig) -> Self {
        let router = Self::build_router(store, &config);
        Self { config, router }
    }

    /// Build the router with shared state and CORS
    fn build_router(store: Arc<dyn RecordStore>, config: &ServiceConfig) -> Router {
        let state = AppState {
            api: Arc::new(CatalogApi::new(store)),
            doc: Arc::new(ApiDoc::build(operation_docs())),
            gate: Arc::new(WriteGate::new(config.api_key.clone())),
        };

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        api_routes(state).layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {e}"),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info(
            "SERVER_LISTENING",
            &[("addr", addr.to_string().as_str()), ("docs", "/api-docs")],
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
