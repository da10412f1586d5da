use utoipa::OpenApi;

use crate::application::http::{
    adoption::router::AdoptionApiDoc, appointment::router::AppointmentApiDoc,
    dashboard::router::DashboardApiDoc, diet_plan::router::DietPlanApiDoc,
    health::router::HealthApiDoc, pet::router::PetApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PawCare API"
    ),
    nest(
        (path = "/diet-plans", api = DietPlanApiDoc),
        (path = "/pets", api = PetApiDoc),
        (path = "/appointments", api = AppointmentApiDoc),
        (path = "/adoptions", api = AdoptionApiDoc),
        (path = "/dashboard", api = DashboardApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
