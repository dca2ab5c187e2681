use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and the active scoring setup.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "weight_scheme": state.config.weight_scheme,
        "weights": state.engine.weights(),
        "semantic_backend": state.engine.semantic_backend(),
        "degree_lookup": state.config.degree_lookup_enabled
    }))
}
