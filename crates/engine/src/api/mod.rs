//! API layer - HTTP entry points.

pub mod cors;
pub mod http;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::app::App;

/// Build the full router: routes, request tracing, CORS policy.
pub fn router(app: Arc<App>) -> Router {
    http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors::cors_middleware))
}
