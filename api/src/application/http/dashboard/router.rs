use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::get_dashboard_stats::{__path_get_dashboard_stats, get_dashboard_stats};
use crate::application::{
    http::server::app_state::AppState, owner_middleware::owner_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(get_dashboard_stats))]
pub struct DashboardApiDoc;

pub fn dashboard_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/dashboard/stats", state.args.server.root_path),
            get(get_dashboard_stats),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            owner_middleware,
        ))
}
