use axum::{
    Extension,
    extract::{Path, State},
};
use pawcare_core::domain::pet::{entities::Pet, ports::PetService};
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
pub struct GetPetResponse {
    pub data: Pet,
}

#[utoipa::path(
    get,
    path = "/{pet_id}",
    tag = "pet",
    summary = "Get pet",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("X-Owner-Id" = Option<String>, Header, description = "Owner id, defaults to the demo owner"),
    ),
    responses(
        (status = 200, body = GetPetResponse),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn get_pet(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(owner): Extension<OwnerContext>,
) -> Result<Response<GetPetResponse>, ApiError> {
    let pet = state
        .service
        .get_pet(owner.owner_id, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPetResponse { data: pet }))
}
