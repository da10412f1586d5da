use axum::{Extension, extract::State};
use pawcare_core::domain::appointment::{
    entities::Appointment, ports::AppointmentService, value_objects::ScheduleAppointmentInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        appointment::validators::ScheduleAppointmentValidator,
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
pub struct ScheduleAppointmentResponse {
    pub data: Appointment,
}

#[utoipa::path(
    post,
    path = "",
    tag = "appointment",
    summary = "Schedule appointment",
    description = "Books a vet visit for one of the owner's pets. New appointments are Upcoming.",
    request_body = ScheduleAppointmentValidator,
    params(
        ("X-Owner-Id" = Option<String>, Header, description = "Owner id, defaults to the demo owner"),
    ),
    responses(
        (status = 201, body = ScheduleAppointmentResponse),
        (status = 400, description = "Missing or empty fields"),
        (status = 404, description = "Selected pet not found in user records")
    )
)]
pub async fn schedule_appointment(
    State(state): State<AppState>,
    Extension(owner): Extension<OwnerContext>,
    ValidateJson(payload): ValidateJson<ScheduleAppointmentValidator>,
) -> Result<Response<ScheduleAppointmentResponse>, ApiError> {
    let appointment = state
        .service
        .schedule_appointment(ScheduleAppointmentInput {
            owner_id: owner.owner_id,
            pet_info: payload.pet_info,
            doctor_name: payload.doctor_name,
            hospital_name: payload.hospital_name,
            date: payload.date,
            time: payload.time,
            reason: payload.reason,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ScheduleAppointmentResponse { data: appointment }))
}
