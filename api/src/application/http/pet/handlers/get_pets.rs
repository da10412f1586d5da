use axum::{Extension, extract::State};
use pawcare_core::domain::pet::{entities::Pet, ports::PetService, value_objects::GetPetsFilter};
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

const SORTABLE_FIELDS: &[&str] = &["name", "kind", "created_at"];

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPetsResponse {
    pub data: Vec<Pet>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "pet",
    summary = "List pets",
    description = "Pets of the current owner, oldest first by default.",
    params(
        ("X-Owner-Id" = Option<String>, Header, description = "Owner id, defaults to the demo owner"),
        ("kind" = Option<String>, Query, description = "Only this species"),
        ("offset" = Option<i64>, Query, description = "Rows to skip"),
        ("limit" = Option<i64>, Query, description = "Page size, 1 to 100, default 20"),
        ("sort" = Option<String>, Query, description = "`name`, `kind` or `created_at`, prefix `-` for descending"),
    ),
    responses(
        (status = 200, body = GetPetsResponse)
    )
)]
pub async fn get_pets(
    State(state): State<AppState>,
    Extension(owner): Extension<OwnerContext>,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetPetsResponse>, ApiError> {
    let pets = state
        .service
        .get_pets(
            owner.owner_id,
            GetPetsFilter {
                offset: Some(query.pagination.offset_u32()),
                limit: Some(query.pagination.limit_u32()),
                kind: query.filter("kind").map(str::to_string),
                sort: query.sort.restricted_to(SORTABLE_FIELDS),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPetsResponse {
        count: pets.len(),
        data: pets,
        offset: query.pagination.offset,
        limit: query.pagination.limit,
    }))
}
