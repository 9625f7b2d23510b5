//! REST API for the dashboard's read-only query surface.
//!
//! GET endpoints:
//! - `/crops` — full crop catalog with per-month figures
//! - `/months` — chart axis labels
//! - `/environment?month=N` — environmental reading for one month
//! - `/production?month=N`, `/production/annual` — production summaries
//! - `/series/{harvest,costs,profits,water}` — chart series with mean

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::reporting::Dashboard;

/// Application state shared across all request handlers.
///
/// Wrapped in `Arc`; the simulator behind the dashboard fills its caches on
/// first access and is immutable afterwards, so handlers need no locks.
pub struct AppState {
    /// Read-only view over the shared simulator.
    pub dashboard: Dashboard,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/crops", get(handlers::get_crops))
        .route("/months", get(handlers::get_months))
        .route("/environment", get(handlers::get_environment))
        .route("/production", get(handlers::get_production))
        .route("/production/annual", get(handlers::get_annual_production))
        .route("/series/harvest", get(handlers::get_harvest_series))
        .route("/series/costs", get(handlers::get_cost_series))
        .route("/series/profits", get(handlers::get_profit_series))
        .route("/series/water", get(handlers::get_water_series))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
