pub mod get_appointments;
pub mod schedule_appointment;
