use axum::Json;

use crate::types::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy("weimood", env!("CARGO_PKG_VERSION")))
}
