//! HTTP routes.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use charforge_domain::{GeneratedCharacter, GeneratedName, GeneratedPersonality, GenerationError};
use std::sync::Arc;

use crate::app::App;

/// Create all HTTP routes.
///
/// Any path without a route is echoed back as plain text.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/name", get(generate_name).post(generate_name))
        .route(
            "/personality",
            get(generate_personality).post(generate_personality),
        )
        .route("/character", get(generate_character).post(generate_character))
        .fallback(echo_path)
}

async fn echo_path(uri: Uri) -> String {
    format!("Hello, you've requested: {}\n", uri.path())
}

async fn generate_name(State(app): State<Arc<App>>) -> Result<Json<GeneratedName>, ApiError> {
    let name = app.use_cases.generation.name.execute()?;
    Ok(Json(name))
}

async fn generate_personality(
    State(app): State<Arc<App>>,
) -> Result<Json<GeneratedPersonality>, ApiError> {
    let personality = app.use_cases.generation.personality.execute()?;
    Ok(Json(personality))
}

async fn generate_character(
    State(app): State<Arc<App>>,
) -> Result<Json<GeneratedCharacter>, ApiError> {
    let character = app.use_cases.generation.character.execute()?;
    Ok(Json(character))
}

#[derive(Debug)]
pub enum ApiError {
    DataUnavailable(GenerationError),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::DataUnavailable(e) => {
                tracing::warn!(dataset = %e.dataset(), "Request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(e: GenerationError) -> Self {
        ApiError::DataUnavailable(e)
    }
}
