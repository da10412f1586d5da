use axum::{
    Extension,
    extract::{Path, State},
};
use pawcare_core::domain::diet_plan::ports::DietPlanService;
use uuid::Uuid;

use crate::application::{
    http::{
        diet_plan::handlers::generate_diet_plan::GenerateDietPlanResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    owner_middleware::OwnerContext,
};

#[utoipa::path(
    get,
    path = "/{pet_id}/diet-plan",
    tag = "pet",
    summary = "Generate diet plan for a stored pet",
    description = "Uses the pet's recorded age and breed, with its health status as the condition.",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("X-Owner-Id" = Option<String>, Header, description = "Owner id, defaults to the demo owner"),
    ),
    responses(
        (status = 200, body = GenerateDietPlanResponse),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn get_pet_diet_plan(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(owner): Extension<OwnerContext>,
) -> Result<Response<GenerateDietPlanResponse>, ApiError> {
    let generated = state
        .service
        .generate_pet_diet_plan(owner.owner_id, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateDietPlanResponse { data: generated }))
}
