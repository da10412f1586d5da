use axum::{Extension, extract::State};
use pawcare_core::domain::diet_plan::{
    entities::SavedDietPlan, ports::DietPlanService, value_objects::SaveDietPlanInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        diet_plan::validators::DietPlanValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    owner_middleware::OwnerContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveDietPlanResponse {
    pub data: SavedDietPlan,
}

#[utoipa::path(
    post,
    path = "",
    tag = "diet-plan",
    summary = "Save diet plan",
    description = "Generates a plan for the given profile and stores it for the current owner.",
    request_body = DietPlanValidator,
    params(
        ("X-Owner-Id" = Option<String>, Header, description = "Owner id, defaults to the demo owner"),
    ),
    responses(
        (status = 201, body = SaveDietPlanResponse),
        (status = 400, description = "Missing or empty fields")
    )
)]
pub async fn save_diet_plan(
    State(state): State<AppState>,
    Extension(owner): Extension<OwnerContext>,
    ValidateJson(payload): ValidateJson<DietPlanValidator>,
) -> Result<Response<SaveDietPlanResponse>, ApiError> {
    let saved = state
        .service
        .save_diet_plan(SaveDietPlanInput {
            owner_id: owner.owner_id,
            pet_name: payload.pet_name,
            age: payload.age,
            breed: payload.breed,
            condition: payload.condition,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SaveDietPlanResponse { data: saved }))
}
