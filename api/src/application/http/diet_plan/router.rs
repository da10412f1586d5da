use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    delete_diet_plan::{__path_delete_diet_plan, delete_diet_plan},
    generate_diet_plan::{__path_generate_diet_plan, generate_diet_plan},
    get_diet_plan::{__path_get_diet_plan, get_diet_plan},
    get_diet_plans::{__path_get_diet_plans, get_diet_plans},
    save_diet_plan::{__path_save_diet_plan, save_diet_plan},
};
use crate::application::{
    http::server::app_state::AppState, owner_middleware::owner_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(
    generate_diet_plan,
    save_diet_plan,
    get_diet_plans,
    get_diet_plan,
    delete_diet_plan
))]
pub struct DietPlanApiDoc;

pub fn diet_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/diet-plans/generate", state.args.server.root_path),
            post(generate_diet_plan),
        )
        .route(
            &format!("{}/diet-plans", state.args.server.root_path),
            post(save_diet_plan).get(get_diet_plans),
        )
        .route(
            &format!("{}/diet-plans/{{plan_id}}", state.args.server.root_path),
            get(get_diet_plan).delete(delete_diet_plan),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            owner_middleware,
        ))
}
