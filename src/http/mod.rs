//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
  Router,
  routing::{get, post},
};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

pub mod error;
pub mod index;
pub mod logs;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(index::hello))
    .route("/logs", get(logs::list_logs))
    .route("/log-get", get(logs::create_log_query))
    .route("/log", post(logs::create_log_json))
    .with_state(state)
    .layer(TraceLayer::new_for_http())
    .layer(
      CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any),
    )
}
