use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    appointment::{
        entities::{Appointment, AppointmentStatus},
        value_objects::{GetAppointmentsFilter, ScheduleAppointmentInput},
    },
    common::entities::app_errors::CoreError,
};

/// Repository trait for vet appointments
#[cfg_attr(test, mockall::automock)]
pub trait AppointmentRepository: Send + Sync {
    fn create_appointment(
        &self,
        appointment: Appointment,
    ) -> impl Future<Output = Result<Appointment, CoreError>> + Send;

    /// Newest date and time first.
    fn get_by_owner(
        &self,
        owner_id: Uuid,
        filter: GetAppointmentsFilter,
    ) -> impl Future<Output = Result<Vec<Appointment>, CoreError>> + Send;

    fn count_by_owner_and_status(
        &self,
        owner_id: Uuid,
        status: AppointmentStatus,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// Service trait for vet appointments
pub trait AppointmentService: Send + Sync {
    fn schedule_appointment(
        &self,
        input: ScheduleAppointmentInput,
    ) -> impl Future<Output = Result<Appointment, CoreError>> + Send;

    fn get_appointments(
        &self,
        owner_id: Uuid,
        filter: GetAppointmentsFilter,
    ) -> impl Future<Output = Result<Vec<Appointment>, CoreError>> + Send;
}
