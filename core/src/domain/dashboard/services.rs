use uuid::Uuid;

use crate::domain::{
    adoption::{entities::AdoptionStatus, ports::AdoptionRepository},
    appointment::{entities::AppointmentStatus, ports::AppointmentRepository},
    common::{entities::app_errors::CoreError, services::Service},
    dashboard::{entities::DashboardStats, ports::DashboardService},
    diet_plan::ports::DietPlanRepository,
    health::ports::HealthCheckRepository,
    pet::ports::PetRepository,
};

impl<P, AP, AD, DP, HC> DashboardService for Service<P, AP, AD, DP, HC>
where
    P: PetRepository,
    AP: AppointmentRepository,
    AD: AdoptionRepository,
    DP: DietPlanRepository,
    HC: HealthCheckRepository,
{
    async fn get_dashboard_stats(&self, owner_id: Uuid) -> Result<DashboardStats, CoreError> {
        let registered_pets = self.pet_repository.count_by_owner(owner_id).await?;
        let upcoming_appointments = self
            .appointment_repository
            .count_by_owner_and_status(owner_id, AppointmentStatus::Upcoming)
            .await?;
        let available_adoption = self
            .adoption_repository
            .count_by_status(AdoptionStatus::Available)
            .await?;
        let saved_diet_plans = self.diet_plan_repository.count_by_owner(owner_id).await?;

        Ok(DashboardStats {
            registered_pets,
            upcoming_appointments,
            available_adoption,
            saved_diet_plans,
        })
    }
}
