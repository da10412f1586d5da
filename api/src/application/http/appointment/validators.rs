use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScheduleAppointmentValidator {
    /// Pet picker label, "Buddy - Golden Retriever". The part before " - "
    /// names the pet.
    #[validate(length(min = 1, message = "pet_info is required"))]
    pub pet_info: String,

    #[validate(length(min = 1, message = "doctor_name is required"))]
    pub doctor_name: String,

    #[validate(length(min = 1, message = "hospital_name is required"))]
    pub hospital_name: String,

    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,

    #[validate(length(min = 1, message = "time is required"))]
    pub time: String,

    #[validate(length(min = 1, message = "reason is required"))]
    pub reason: String,
}
