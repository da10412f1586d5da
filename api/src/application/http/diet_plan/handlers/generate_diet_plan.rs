use axum::extract::State;
use pawcare_core::domain::diet_plan::{
    entities::GeneratedDietPlan, ports::DietPlanService, value_objects::GenerateDietPlanInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    diet_plan::validators::DietPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateDietPlanResponse {
    pub data: GeneratedDietPlan,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "diet-plan",
    summary = "Generate diet plan",
    description = "Builds a feeding plan from the pet's age, breed and condition without storing it. An unknown condition is reported through `condition_recognized` and leaves the plan unchanged.",
    request_body = DietPlanValidator,
    responses(
        (status = 200, body = GenerateDietPlanResponse),
        (status = 400, description = "Missing or empty fields")
    )
)]
pub async fn generate_diet_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DietPlanValidator>,
) -> Result<Response<GenerateDietPlanResponse>, ApiError> {
    let generated = state.service.generate_diet_plan(GenerateDietPlanInput {
        pet_name: payload.pet_name,
        age: payload.age,
        breed: payload.breed,
        condition: payload.condition,
    });

    Ok(Response::OK(GenerateDietPlanResponse { data: generated }))
}
