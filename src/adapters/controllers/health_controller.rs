use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub struct HealthController;

impl HealthController {
    /// Liveness probe. Does not touch S3 or Postgres.
    /// GET /health
    pub async fn health_check() -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok".to_string(),
        })
    }
}
