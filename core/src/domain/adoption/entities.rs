use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AdoptionStatus {
    Available,
    Adopted,
}

impl AdoptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdoptionStatus::Available => "Available",
            AdoptionStatus::Adopted => "Adopted",
        }
    }
}

impl fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdoptionStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(AdoptionStatus::Available),
            "Adopted" => Ok(AdoptionStatus::Adopted),
            _ => Err(()),
        }
    }
}

/// Shelter listing, visible to every owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdoptionListing {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub status: AdoptionStatus,
    pub shelter: String,
    pub contact_phone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AdoptionListingConfig {
    pub name: String,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub shelter: String,
    pub contact_phone: String,
}

impl AdoptionListing {
    pub fn new(config: AdoptionListingConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            breed: config.breed,
            gender: config.gender,
            age: config.age,
            status: AdoptionStatus::Available,
            shelter: config.shelter,
            contact_phone: config.contact_phone,
            created_at: now,
        }
    }
}
