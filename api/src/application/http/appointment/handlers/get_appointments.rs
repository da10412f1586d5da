use axum::{Extension, extract::State};
use pawcare_core::domain::appointment::{
    entities::Appointment, ports::AppointmentService, value_objects::GetAppointmentsFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        query_extractor::QueryParamsExtractor,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    owner_middleware::OwnerContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAppointmentsResponse {
    pub data: Vec<Appointment>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "appointment",
    summary = "List appointments",
    description = "Appointments of the current owner, latest date and time first.",
    params(
        ("X-Owner-Id" = Option<String>, Header, description = "Owner id, defaults to the demo owner"),
        ("status" = Option<String>, Query, description = "Upcoming, Completed or Cancelled"),
        ("offset" = Option<i64>, Query, description = "Rows to skip"),
        ("limit" = Option<i64>, Query, description = "Page size, 1 to 100, default 20"),
    ),
    responses(
        (status = 200, body = GetAppointmentsResponse)
    )
)]
pub async fn get_appointments(
    State(state): State<AppState>,
    Extension(owner): Extension<OwnerContext>,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetAppointmentsResponse>, ApiError> {
    let appointments = state
        .service
        .get_appointments(
            owner.owner_id,
            GetAppointmentsFilter {
                offset: Some(query.pagination.offset_u32()),
                limit: Some(query.pagination.limit_u32()),
                status: query.filter("status").map(str::to_string),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAppointmentsResponse {
        count: appointments.len(),
        data: appointments,
        offset: query.pagination.offset,
        limit: query.pagination.limit,
    }))
}
