use super::handlers::{health, optimize_route, traffic_prediction};
use super::ServerConfig;
use crate::app::AppError;
use crate::optimizer::RouteOptimizer;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct ApiState {
    pub optimizer: Arc<RouteOptimizer>,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/optimize-route", post(optimize_route))
        .route("/traffic-prediction", get(traffic_prediction))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// runs the http service until interrupted. blocks the calling thread.
pub fn serve(config: &ServerConfig, optimizer: Arc<RouteOptimizer>) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::Server(format!("failure creating async rust tokio runtime: {e}")))?;
    let address = config.address();
    let app = router(ApiState {
        optimizer: optimizer.clone(),
    });
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .map_err(|e| AppError::Server(format!("unable to bind to {address}: {e}")))?;
        log::info!("smart route optimization service listening on {address}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::Server(e.to_string()))
    })?;
    drop(runtime);
    // the optimizer owns a blocking http client that must be released outside the runtime
    drop(optimizer);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("unable to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}
