use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use tracing::error;

use crate::state::AppState;

/// Liveness + ping a la base de datos
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "ok",
        Err(e) => {
            error!("❌ Health check sin base de datos: {}", e);
            "unavailable"
        }
    };

    let (status, overall) = if database == "ok" {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(json!({
            "status": overall,
            "database": database,
            "environment": state.config.environment,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
