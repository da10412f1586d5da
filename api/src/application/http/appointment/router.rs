use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    get_appointments::{__path_get_appointments, get_appointments},
    schedule_appointment::{__path_schedule_appointment, schedule_appointment},
};
use crate::application::{
    http::server::app_state::AppState, owner_middleware::owner_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(schedule_appointment, get_appointments))]
pub struct AppointmentApiDoc;

pub fn appointment_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/appointments", state.args.server.root_path),
            post(schedule_appointment).get(get_appointments),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            owner_middleware,
        ))
}
