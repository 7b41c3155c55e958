//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the echo handler
//! - Wire up middleware (tracing, request ID, request logging)
//! - Bind server to listener and shut down on Ctrl+C

use std::sync::Arc;

use axum::{
    http::{HeaderName, Method, Uri},
    middleware,
    response::IntoResponse,
    routing::any,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::context::RequestContext;
use crate::http::middleware::{request_logging_middleware, MakeRequestTag, RequestLogging};
use crate::http::X_REQUEST_ID;
use crate::logging::Logger;

/// Demo server that logs every request through the leveled logger.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and logger.
    pub fn new(config: &AppConfig, logger: Arc<Logger>) -> Self {
        let state = RequestLogging::new(logger, config.headers.to_policy());
        let router = build_router(state);
        Self { router }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: RequestLogging) -> Router {
    let request_id = HeaderName::from_static(X_REQUEST_ID);
    Router::new()
        .route("/{*path}", any(echo_handler))
        .route("/", any(echo_handler))
        .layer(middleware::from_fn_with_state(state, request_logging_middleware))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestTag))
        .layer(TraceLayer::new_for_http())
}

/// Echoes the method, path and request tag back as JSON.
async fn echo_handler(ctx: RequestContext, method: Method, uri: Uri) -> impl IntoResponse {
    ctx.logger().lazy().debug(|| {
        vec![
            Value::from("[echo]"),
            Value::from(method.as_str()),
            Value::from(uri.path()),
        ]
    });

    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "request_id": ctx.request_tag(),
    }))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
