use axum::extract::State;
use pawcare_core::domain::adoption::{
    entities::{AdoptionListing, AdoptionStatus},
    ports::AdoptionService,
    value_objects::GetAdoptionsFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAdoptionListingsResponse {
    pub data: Vec<AdoptionListing>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "adoption",
    summary = "List adoption listings",
    description = "Shelter listings shared by all owners.",
    params(
        ("status" = Option<String>, Query, description = "Available or Adopted"),
        ("offset" = Option<i64>, Query, description = "Rows to skip"),
        ("limit" = Option<i64>, Query, description = "Page size, 1 to 100, default 20"),
    ),
    responses(
        (status = 200, body = GetAdoptionListingsResponse),
        (status = 400, description = "Unknown status")
    )
)]
pub async fn get_adoption_listings(
    State(state): State<AppState>,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetAdoptionListingsResponse>, ApiError> {
    let status = query
        .filter("status")
        .map(|value| {
            value
                .parse::<AdoptionStatus>()
                .map_err(|_| ApiError::BadRequest(format!("Unknown adoption status: {value}")))
        })
        .transpose()?;

    let listings = state
        .service
        .get_adoption_listings(GetAdoptionsFilter {
            offset: Some(query.pagination.offset_u32()),
            limit: Some(query.pagination.limit_u32()),
            status,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAdoptionListingsResponse {
        count: listings.len(),
        data: listings,
        offset: query.pagination.offset,
        limit: query.pagination.limit,
    }))
}
