use crate::domain::{
    adoption::ports::AdoptionRepository, appointment::ports::AppointmentRepository,
    diet_plan::ports::DietPlanRepository, health::ports::HealthCheckRepository,
    pet::ports::PetRepository,
};

/// Application service. Every feature's `*Service` trait is implemented on
/// this one struct so handlers only ever hold a single value.
#[derive(Clone)]
pub struct Service<P, AP, AD, DP, HC>
where
    P: PetRepository,
    AP: AppointmentRepository,
    AD: AdoptionRepository,
    DP: DietPlanRepository,
    HC: HealthCheckRepository,
{
    pub(crate) pet_repository: P,
    pub(crate) appointment_repository: AP,
    pub(crate) adoption_repository: AD,
    pub(crate) diet_plan_repository: DP,
    pub(crate) health_check_repository: HC,
}

impl<P, AP, AD, DP, HC> Service<P, AP, AD, DP, HC>
where
    P: PetRepository,
    AP: AppointmentRepository,
    AD: AdoptionRepository,
    DP: DietPlanRepository,
    HC: HealthCheckRepository,
{
    pub fn new(
        pet_repository: P,
        appointment_repository: AP,
        adoption_repository: AD,
        diet_plan_repository: DP,
        health_check_repository: HC,
    ) -> Self {
        Self {
            pet_repository,
            appointment_repository,
            adoption_repository,
            diet_plan_repository,
            health_check_repository,
        }
    }
}
