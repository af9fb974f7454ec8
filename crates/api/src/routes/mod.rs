pub mod generate;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate    POST -> blueprint generation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/generate", generate::router())
}
