use axum::{Extension, extract::State};
use pawcare_core::domain::pet::{entities::Pet, ports::PetService, value_objects::CreatePetInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        pet::validators::CreatePetValidator,
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
pub struct CreatePetResponse {
    pub data: Pet,
}

#[utoipa::path(
    post,
    path = "",
    tag = "pet",
    summary = "Add pet",
    description = "Adds a pet to the current owner's profile. Allergies default to \"None\".",
    request_body = CreatePetValidator,
    params(
        ("X-Owner-Id" = Option<String>, Header, description = "Owner id, defaults to the demo owner"),
    ),
    responses(
        (status = 201, body = CreatePetResponse),
        (status = 400, description = "Missing or empty fields")
    )
)]
pub async fn create_pet(
    State(state): State<AppState>,
    Extension(owner): Extension<OwnerContext>,
    ValidateJson(payload): ValidateJson<CreatePetValidator>,
) -> Result<Response<CreatePetResponse>, ApiError> {
    let pet = state
        .service
        .create_pet(CreatePetInput {
            owner_id: owner.owner_id,
            name: payload.name,
            kind: payload.kind,
            breed: payload.breed,
            gender: payload.gender,
            age: payload.age,
            weight: payload.weight,
            health_status: payload.health_status,
            allergies: payload.allergies,
            vet_name: payload.vet_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreatePetResponse { data: pet }))
}
