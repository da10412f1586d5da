use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub registered_pets: u64,
    pub upcoming_appointments: u64,
    pub available_adoption: u64,
    pub saved_diet_plans: u64,
}
