use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - Service description
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Content API",
            "version": version,
            "environment": state.config.environment,
            "play_sessions_limit": state.limiter.limit(),
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "whoami": "/auth/whoami (protected)",
                "content": "/content[/:id] (protected; writes require admin)",
                "play": "/content/:id/play (protected)",
            }
        }
    }))
}

/// GET /health - Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}
