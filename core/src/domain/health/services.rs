use crate::domain::{
    adoption::ports::AdoptionRepository,
    appointment::ports::AppointmentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::ports::DietPlanRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    pet::ports::PetRepository,
};

impl<P, AP, AD, DP, HC> HealthCheckService for Service<P, AP, AD, DP, HC>
where
    P: PetRepository,
    AP: AppointmentRepository,
    AD: AdoptionRepository,
    DP: DietPlanRepository,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let latency_ms = self.health_check_repository.ping().await?;

        Ok(DatabaseHealthStatus {
            status: "ok".to_string(),
            latency_ms,
        })
    }
}
