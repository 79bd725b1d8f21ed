//! HTTP surface: router, middleware stack and server loop.

pub mod error;
pub mod middleware;
pub mod routes;

pub use error::{shape, ChatError};

use std::net::SocketAddr;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::app::ChatApp;
use crate::models::Config;
use crate::{Error, Result};

/// Build the router with all routes and layers.
pub fn build(app: ChatApp, config: &Config) -> Router {
    routes::router()
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        // Answers are generated per request and must never be cached.
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(middleware::cors_layer(
            config.cors_allowed_origins.as_deref(),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

/// Bind `config.bind_address` and serve until Ctrl-C or SIGTERM.
pub async fn serve(app: ChatApp, config: &Config) -> Result<()> {
    let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
        Error::Config(format!(
            "Invalid bind address '{}': {}",
            config.bind_address, e
        ))
    })?;

    let router = build(app, config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Returns a future that resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
