use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};
use pawcare_core::domain::diet_plan::ports::DietPlanService;
use uuid::Uuid;

use crate::application::{
    http::server::{api_entities::api_error::ApiError, app_state::AppState},
    owner_middleware::OwnerContext,
};

#[utoipa::path(
    delete,
    path = "/{plan_id}",
    tag = "diet-plan",
    summary = "Delete saved diet plan",
    params(
        ("plan_id" = Uuid, Path, description = "Diet plan ID"),
        ("X-Owner-Id" = Option<String>, Header, description = "Owner id, defaults to the demo owner"),
    ),
    responses(
        (status = 204, description = "Diet plan deleted"),
        (status = 404, description = "Diet plan not found")
    )
)]
pub async fn delete_diet_plan(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(owner): Extension<OwnerContext>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_diet_plan(owner.owner_id, plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
