use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppError, types::AppState};

pub const STATUS_OK: &str = "OK";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK.to_string(),
        }
    }
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/auth/health", axum::routing::get(health))
        .route("/auth/health/ready", axum::routing::get(ready))
}

/// Liveness probe. Never touches the user repository.
#[utoipa::path(get, path = "/api/auth/health", responses((status = 200, body = HealthStatus)), tag = "System")]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

/// Readiness probe: answers OK only while the user repository responds.
#[utoipa::path(
    get,
    path = "/api/auth/health/ready",
    responses(
        (status = 200, body = HealthStatus),
        (status = 503, description = "User repository unreachable")
    ),
    tag = "System"
)]
pub async fn ready(State(state): State<AppState>) -> Result<Json<HealthStatus>, AppError> {
    state.users.ping().await?;
    Ok(Json(HealthStatus::ok()))
}
