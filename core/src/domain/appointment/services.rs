use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    adoption::ports::AdoptionRepository,
    appointment::{
        entities::{Appointment, AppointmentConfig},
        ports::{AppointmentRepository, AppointmentService},
        value_objects::{GetAppointmentsFilter, ScheduleAppointmentInput, pet_name_from_info},
    },
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::ports::DietPlanRepository,
    health::ports::HealthCheckRepository,
    pet::ports::PetRepository,
};

impl<P, AP, AD, DP, HC> AppointmentService for Service<P, AP, AD, DP, HC>
where
    P: PetRepository,
    AP: AppointmentRepository,
    AD: AdoptionRepository,
    DP: DietPlanRepository,
    HC: HealthCheckRepository,
{
    async fn schedule_appointment(
        &self,
        input: ScheduleAppointmentInput,
    ) -> Result<Appointment, CoreError> {
        let pet_name = pet_name_from_info(&input.pet_info).to_string();

        let pet = self
            .pet_repository
            .get_by_name(pet_name.clone(), input.owner_id)
            .await?
            .ok_or_else(|| {
                warn!(pet_name = %pet_name, "appointment for unknown pet");
                CoreError::PetNotFound
            })?;

        let appointment = Appointment::new(AppointmentConfig {
            owner_id: input.owner_id,
            pet_id: pet.id,
            doctor_name: input.doctor_name,
            hospital_name: input.hospital_name,
            date: input.date,
            time: input.time,
            reason: input.reason,
        });

        let appointment = self
            .appointment_repository
            .create_appointment(appointment)
            .await?;
        info!(appointment_id = %appointment.id, pet_id = %pet.id, "appointment scheduled");

        Ok(appointment)
    }

    async fn get_appointments(
        &self,
        owner_id: Uuid,
        filter: GetAppointmentsFilter,
    ) -> Result<Vec<Appointment>, CoreError> {
        self.appointment_repository
            .get_by_owner(owner_id, filter)
            .await
    }
}
