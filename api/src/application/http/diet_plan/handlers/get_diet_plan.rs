use axum::{
    Extension,
    extract::{Path, State},
};
use pawcare_core::domain::diet_plan::{entities::SavedDietPlan, ports::DietPlanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    owner_middleware::OwnerContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDietPlanResponse {
    pub data: SavedDietPlan,
}

#[utoipa::path(
    get,
    path = "/{plan_id}",
    tag = "diet-plan",
    summary = "Get saved diet plan",
    params(
        ("plan_id" = Uuid, Path, description = "Diet plan ID"),
        ("X-Owner-Id" = Option<String>, Header, description = "Owner id, defaults to the demo owner"),
    ),
    responses(
        (status = 200, body = GetDietPlanResponse),
        (status = 404, description = "Diet plan not found")
    )
)]
pub async fn get_diet_plan(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(owner): Extension<OwnerContext>,
) -> Result<Response<GetDietPlanResponse>, ApiError> {
    let plan = state
        .service
        .get_diet_plan(owner.owner_id, plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDietPlanResponse { data: plan }))
}
