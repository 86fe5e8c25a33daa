use std::future::Future;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::core::ConfigProvider;
use crate::utils::error::{CalcError, Result};

use super::handlers;

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/calculate", post(handlers::calculate))
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    serve_listener(listener, shutdown_signal()).await
}

pub async fn serve_listener<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    tracing::info!("🚀 Calculator listening on http://{}", local_addr);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| CalcError::ServerError {
            message: format!("server on {} stopped: {}", local_addr, e),
        })?;

    tracing::info!("Calculator server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
