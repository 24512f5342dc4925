pub mod api;

use crate::services::StockService;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub stocks: Arc<StockService>,
}

/// Start the axum server
pub async fn serve(service: Arc<StockService>, port: u16) -> crate::error::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting sp500-dashboard server");

    let app_state = AppState { stocks: service };

    // Dashboard is served same-origin in production; keep CORS open for
    // the Vite dev server
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    tracing::info!("Registering routes:");
    tracing::info!("  GET /api/stocks");
    tracing::info!("  GET /api/index");
    tracing::info!("  GET /api/historical?timeRange=1D&symbols=AAPL,MSFT");
    tracing::info!("  GET /api/health");

    let app = Router::new()
        .route("/api/stocks", get(api::stocks_handler))
        .route("/api/index", get(api::index_handler))
        .route("/api/historical", get(api::historical_handler))
        .route("/api/health", get(api::health_handler))
        .layer(cors)
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(crate::error::AppError::from)?;
    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::AppError::Io(e.to_string()))?;

    Ok(())
}
