use axum::{Extension, extract::State};
use pawcare_core::domain::dashboard::{entities::DashboardStats, ports::DashboardService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    owner_middleware::OwnerContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDashboardStatsResponse {
    pub data: DashboardStats,
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = "dashboard",
    summary = "Dashboard counters",
    description = "Registered pets, upcoming appointments and saved diet plans of the current owner, plus the number of listings still available for adoption.",
    params(
        ("X-Owner-Id" = Option<String>, Header, description = "Owner id, defaults to the demo owner"),
    ),
    responses(
        (status = 200, body = GetDashboardStatsResponse)
    )
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    Extension(owner): Extension<OwnerContext>,
) -> Result<Response<GetDashboardStatsResponse>, ApiError> {
    let stats = state
        .service
        .get_dashboard_stats(owner.owner_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDashboardStatsResponse { data: stats }))
}
