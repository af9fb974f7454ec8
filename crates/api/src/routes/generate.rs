//! Route and handler for blueprint generation.

use axum::{routing::post, Json, Router};
use shortforge_core::{Blueprint, RawGenerationInput};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /generate -- build a production blueprint from a raw request body.
///
/// The body is the partially-populated input record; normalization and
/// defaulting happen inside the engine. An empty topic surfaces as a 400
/// via `CoreError::Validation`; the response body is the blueprint itself,
/// serialized with its contract field names (the rendering side
/// destructures them directly).
async fn generate_blueprint(Json(body): Json<RawGenerationInput>) -> AppResult<Json<Blueprint>> {
    let blueprint = shortforge_core::generate(body)?;
    tracing::info!(
        runtime = blueprint.metadata.runtime,
        segments = blueprint.content_segments.len(),
        "Generated blueprint"
    );
    Ok(Json(blueprint))
}

/// Generation routes mounted at `/generate`.
///
/// ```text
/// POST /   -> generate_blueprint
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(generate_blueprint))
}
