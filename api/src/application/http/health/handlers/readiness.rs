use axum::extract::State;
use pawcare_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use tracing::warn;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Runs a trivial database query and reports its latency.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(|e| {
        warn!("readiness check failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(status))
}
