use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Upcoming",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Upcoming" => Ok(AppointmentStatus::Upcoming),
            "Completed" => Ok(AppointmentStatus::Completed),
            "Cancelled" => Ok(AppointmentStatus::Cancelled),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub pet_id: Uuid,
    pub doctor_name: String,
    pub hospital_name: String,
    pub date: String, // as entered, e.g. "2025-03-14"
    pub time: String, // as entered, e.g. "10:30"
    pub reason: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AppointmentConfig {
    pub owner_id: Uuid,
    pub pet_id: Uuid,
    pub doctor_name: String,
    pub hospital_name: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

impl Appointment {
    /// New appointments always start out upcoming.
    pub fn new(config: AppointmentConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            owner_id: config.owner_id,
            pet_id: config.pet_id,
            doctor_name: config.doctor_name,
            hospital_name: config.hospital_name,
            date: config.date,
            time: config.time,
            reason: config.reason,
            status: AppointmentStatus::Upcoming,
            created_at: now,
        }
    }
}
