//! HTTP presentation layer: dashboard page, CSV download and a JSON API.

mod error;
pub mod handlers;
mod page;
pub mod query;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;

use crate::errors::{AppError, AppResult};
use std::net::SocketAddr;

pub const DEFAULT_LOG_FILTER: &str = "scriptboard=info,tower_http=info";

/// Install the tracing subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .try_init();
}

/// Bind `bind` and serve until Ctrl-C / SIGTERM.
pub async fn serve(bind: &str, state: AppState) -> AppResult<()> {
    let addr: SocketAddr = bind
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidBind(bind.to_string()))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "dashboard listening on http://{addr}/");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl-C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
