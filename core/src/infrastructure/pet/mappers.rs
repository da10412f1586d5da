use crate::{domain::pet::entities::Pet, entity::pets};

impl From<&pets::Model> for Pet {
    fn from(model: &pets::Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.owner_id,
            name: model.name.clone(),
            kind: model.kind.clone(),
            breed: model.breed.clone(),
            gender: model.gender.clone(),
            age: model.age.clone(),
            weight: model.weight.clone(),
            health_status: model.health_status.clone(),
            allergies: model.allergies.clone(),
            vet_name: model.vet_name.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<pets::Model> for Pet {
    fn from(model: pets::Model) -> Self {
        Self::from(&model)
    }
}
