use axum::{Extension, extract::State};
use pawcare_core::domain::diet_plan::{
    entities::SavedDietPlan, ports::DietPlanService, value_objects::GetDietPlansFilter,
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

const SORTABLE_FIELDS: &[&str] = &["pet_name", "created_at"];

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDietPlansResponse {
    pub data: Vec<SavedDietPlan>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "diet-plan",
    summary = "List saved diet plans",
    description = "Saved plans of the current owner, newest first unless `sort` says otherwise (`pet_name`, `created_at`, prefix `-` for descending).",
    params(
        ("X-Owner-Id" = Option<String>, Header, description = "Owner id, defaults to the demo owner"),
        ("offset" = Option<i64>, Query, description = "Rows to skip"),
        ("limit" = Option<i64>, Query, description = "Page size, 1 to 100, default 20"),
        ("sort" = Option<String>, Query, description = "e.g. `-created_at` or `pet_name`"),
    ),
    responses(
        (status = 200, body = GetDietPlansResponse)
    )
)]
pub async fn get_diet_plans(
    State(state): State<AppState>,
    Extension(owner): Extension<OwnerContext>,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetDietPlansResponse>, ApiError> {
    let plans = state
        .service
        .get_diet_plans(
            owner.owner_id,
            GetDietPlansFilter {
                offset: Some(query.pagination.offset_u32()),
                limit: Some(query.pagination.limit_u32()),
                sort: query.sort.restricted_to(SORTABLE_FIELDS),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDietPlansResponse {
        count: plans.len(),
        data: plans,
        offset: query.pagination.offset,
        limit: query.pagination.limit,
    }))
}
