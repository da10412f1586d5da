use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_pet::{__path_create_pet, create_pet},
    get_pet::{__path_get_pet, get_pet},
    get_pet_diet_plan::{__path_get_pet_diet_plan, get_pet_diet_plan},
    get_pets::{__path_get_pets, get_pets},
};
use crate::application::{
    http::server::app_state::AppState, owner_middleware::owner_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(create_pet, get_pets, get_pet, get_pet_diet_plan))]
pub struct PetApiDoc;

pub fn pet_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/pets", state.args.server.root_path),
            post(create_pet).get(get_pets),
        )
        .route(
            &format!("{}/pets/{{pet_id}}", state.args.server.root_path),
            get(get_pet),
        )
        .route(
            &format!("{}/pets/{{pet_id}}/diet-plan", state.args.server.root_path),
            get(get_pet_diet_plan),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            owner_middleware,
        ))
}
