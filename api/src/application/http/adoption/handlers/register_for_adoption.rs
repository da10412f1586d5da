use axum::extract::State;
use pawcare_core::domain::adoption::{
    entities::AdoptionListing, ports::AdoptionService, value_objects::RegisterAdoptionInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    adoption::validators::RegisterAdoptionValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegisterAdoptionResponse {
    pub message: String,
    pub data: AdoptionListing,
}

#[utoipa::path(
    post,
    path = "",
    tag = "adoption",
    summary = "Register pet for adoption",
    description = "Publishes a shelter listing. Every field is required.",
    request_body = RegisterAdoptionValidator,
    responses(
        (status = 201, body = RegisterAdoptionResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn register_for_adoption(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterAdoptionValidator>,
) -> Result<Response<RegisterAdoptionResponse>, ApiError> {
    let listing = state
        .service
        .register_for_adoption(RegisterAdoptionInput {
            name: payload.name,
            breed: payload.breed,
            gender: payload.gender,
            age: payload.age,
            shelter: payload.shelter,
            contact_phone: payload.contact_phone,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RegisterAdoptionResponse {
        message: format!("{} registered for adoption successfully!", listing.name),
        data: listing,
    }))
}
