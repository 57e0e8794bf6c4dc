pub mod plan;
pub mod quiz;

use axum::{Router, routing::post};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub use plan::generate_plan;
pub use quiz::generate_quiz;

/// Build the application router. Shared by `main` and the integration tests.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/generate-plan", post(generate_plan))
    .route("/generate-quiz", post(generate_quiz))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
