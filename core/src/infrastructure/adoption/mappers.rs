use tracing::warn;

use crate::{
    domain::adoption::entities::{AdoptionListing, AdoptionStatus},
    entity::adoptions,
};

impl From<&adoptions::Model> for AdoptionListing {
    fn from(model: &adoptions::Model) -> Self {
        let status = model.status.parse().unwrap_or_else(|_| {
            warn!(status = %model.status, "unknown adoption status, reading as available");
            AdoptionStatus::Available
        });

        Self {
            id: model.id,
            name: model.name.clone(),
            breed: model.breed.clone(),
            gender: model.gender.clone(),
            age: model.age.clone(),
            status,
            shelter: model.shelter.clone(),
            contact_phone: model.contact_phone.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<adoptions::Model> for AdoptionListing {
    fn from(model: adoptions::Model) -> Self {
        Self::from(&model)
    }
}
