//! HTTP service for the Axis Bank disposal instruction PDF
//!
//! Routes:
//! - `GET /` liveness message
//! - `POST /generate-axis-disposal-pdf/` form record in, PDF download out

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Path of the generation endpoint
pub const GENERATE_PATH: &str = "/generate-axis-disposal-pdf/";

pub fn build_router(state: AppState) -> Router {
    let max_request_bytes = state.config.max_request_bytes();

    Router::new()
        .route("/", get(api::liveness))
        .route(GENERATE_PATH, post(api::generate_disposal_pdf))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_request_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
