pub mod mappers;
pub mod repositories;

pub use repositories::appointment_repository::SqliteAppointmentRepository;
