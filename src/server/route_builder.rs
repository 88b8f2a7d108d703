use axum::{Router, http::Uri};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::config::ServerConfig;
use crate::utils::error::{AppError, AppResult};

pub fn register_routes() -> Router {
    let api_routes = crate::api::routes();

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub async fn bind(config: &ServerConfig) -> AppResult<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| {
            AppError::Internal(format!(
                "Failed to bind {}:{}: {}",
                config.host, config.port, e
            ))
        })
}

pub async fn serve(config: &ServerConfig) -> AppResult<()> {
    let listener = bind(config).await?;
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Internal(format!("Failed to read listen address: {}", e)))?;

    tracing::info!("hexhue listening on http://{}", addr);

    axum::serve(listener, register_routes())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("hexhue stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
