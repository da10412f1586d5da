use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    get_adoption_listings::{__path_get_adoption_listings, get_adoption_listings},
    register_for_adoption::{__path_register_for_adoption, register_for_adoption},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(register_for_adoption, get_adoption_listings))]
pub struct AdoptionApiDoc;

pub fn adoption_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/adoptions", state.args.server.root_path),
        post(register_for_adoption).get(get_adoption_listings),
    )
}
