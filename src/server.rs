//! Axum router and server setup.
//! Used by: main, integration tests.

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::handlers;

/// Builds the application without binding anything, so harnesses can drive it in-process.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
}

/// Serves the router on an already-bound listener until a shutdown signal arrives.
pub async fn serve(listener: TcpListener) -> Result<()> {
    let port = listener.local_addr()?.port();
    tracing::info!("App listening at http://localhost:{}", port);
    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

pub async fn run(config: &Config) -> Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await.map_err(|e| {
        tracing::error!(port = config.port, error = %e, "failed to bind");
        e
    })?;
    serve(listener).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
