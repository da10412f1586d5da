use tracing::warn;

use crate::{
    domain::appointment::entities::{Appointment, AppointmentStatus},
    entity::appointments,
};

impl From<&appointments::Model> for Appointment {
    fn from(model: &appointments::Model) -> Self {
        let status = model.status.parse().unwrap_or_else(|_| {
            warn!(status = %model.status, "unknown appointment status, reading as upcoming");
            AppointmentStatus::Upcoming
        });

        Self {
            id: model.id,
            owner_id: model.owner_id,
            pet_id: model.pet_id,
            doctor_name: model.doctor_name.clone(),
            hospital_name: model.hospital_name.clone(),
            date: model.date.clone(),
            time: model.time.clone(),
            reason: model.reason.clone(),
            status,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<appointments::Model> for Appointment {
    fn from(model: appointments::Model) -> Self {
        Self::from(&model)
    }
}
