//! Axum router and server setup.
//! Used by: main.

use std::future::Future;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers;

pub const HEALTH_PATH: &str = "/api/admin/health";

// Auth routes belong under /api/admin/auth once they exist.
pub fn build_router() -> Router {
    Router::new()
        .route(HEALTH_PATH, get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
}

pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.bind_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::Bind { addr, source })
}

/// Serves until SIGINT or SIGTERM, then drains open connections.
pub async fn serve(listener: TcpListener) -> Result<()> {
    serve_with_shutdown(listener, shutdown_signal()).await
}

pub async fn serve_with_shutdown<F>(listener: TcpListener, signal: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let port = listener.local_addr()?.port();
    tracing::info!("Admin backend listening on port {}", port);
    axum::serve(listener, build_router())
        .with_graceful_shutdown(signal)
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
