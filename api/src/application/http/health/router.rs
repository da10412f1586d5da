use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    liveness::{__path_liveness, liveness},
    readiness::{__path_readiness, readiness},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(liveness, readiness))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/health/live", state.args.server.root_path),
            get(liveness),
        )
        .route(
            &format!("{}/health/ready", state.args.server.root_path),
            get(readiness),
        )
}
