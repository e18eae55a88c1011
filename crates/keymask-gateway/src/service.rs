//! Gateway service - server lifecycle.
//!
//! Owns the configuration and the shared engine handle, assembles the
//! middleware stack, and runs the HTTP server until shutdown is signaled.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::middleware::create_cors_layer;
use crate::router::{handle_process, health_check, service_info, AppState};
use axum::body::Body;
use axum::routing::{get, post};
use axum::Router;
use keymask_engine::SubstitutionCipher;
use std::sync::Arc;
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::map_response_body::MapResponseBodyLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Gateway service state
#[derive(Debug)]
pub struct GatewayService {
    config: GatewayConfig,
    engine: Arc<SubstitutionCipher>,
    shutdown_tx: watch::Sender<bool>,
}

impl GatewayService {
    /// Create a new gateway service over a shared engine.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Config` if the configuration fails
    /// validation.
    pub fn new(
        config: GatewayConfig,
        engine: Arc<SubstitutionCipher>,
    ) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        let (shutdown_tx, _) = watch::channel(false);

        Ok(Self {
            config,
            engine,
            shutdown_tx,
        })
    }

    /// Start the HTTP server and serve until [`shutdown`](Self::shutdown)
    /// is called.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Bind` if the listen address is unavailable
    /// and `GatewayError::Internal` for server faults.
    pub async fn start(&self) -> Result<(), GatewayError> {
        let router = build_router(Arc::clone(&self.engine), &self.config);

        let addr = self.config.http_addr();
        info!(addr = %addr, "Starting HTTP server");
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(e.to_string()))?;

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
                info!("Received shutdown signal");
            })
            .await
            .map_err(|e| GatewayError::Internal(e.to_string()))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Trigger graceful shutdown. In-flight requests finish; the listener
    /// stops accepting new connections.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

/// Build the gateway router with its middleware stack.
///
/// Public so integration tests can serve the real router on an ephemeral
/// listener.
pub fn build_router(engine: Arc<SubstitutionCipher>, config: &GatewayConfig) -> Router {
    let state = AppState { engine };

    // Build middleware stack
    let middleware = ServiceBuilder::new()
        .layer(create_cors_layer(&config.cors))
        // Normalize `TraceLayer`'s wrapped response body back to `axum::body::Body`
        // so the outer `CorsLayer` (which requires `ResBody: Default`) type-checks.
        .layer(MapResponseBodyLayer::new(Body::new))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.limits.request_timeout))
        // Normalize the body-limit layer's response body back to `axum::body::Body`
        // so the outer `TimeoutLayer`/`CorsLayer` (which require `ResBody: Default`)
        // type-check. Purely a body-type rewrap; request handling is unchanged.
        .layer(MapResponseBodyLayer::new(Body::new))
        .layer(RequestBodyLimitLayer::new(config.limits.max_request_size));

    Router::new()
        .route("/", get(service_info))
        .route("/process", post(handle_process))
        .route("/health", get(health_check))
        .layer(middleware)
        .with_state(state)
}
