use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pet {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub kind: String, // species, e.g. "Dog" or "Cat"
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub weight: String,
    pub health_status: String,
    pub allergies: String,
    pub vet_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PetConfig {
    pub owner_id: Uuid,
    pub name: String,
    pub kind: String,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub weight: String,
    pub health_status: String,
    pub allergies: Option<String>,
    pub vet_name: Option<String>,
}

impl Pet {
    pub fn new(config: PetConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            owner_id: config.owner_id,
            name: config.name,
            kind: config.kind,
            breed: config.breed,
            gender: config.gender,
            age: config.age,
            weight: config.weight,
            health_status: config.health_status,
            allergies: config
                .allergies
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| "None".to_string()),
            vet_name: config.vet_name.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PetConfig {
        PetConfig {
            owner_id: Uuid::new_v4(),
            name: "Luna".to_string(),
            kind: "Cat".to_string(),
            breed: "Persian Cat".to_string(),
            gender: "Female".to_string(),
            age: "1.5 years".to_string(),
            weight: "4.2 kg".to_string(),
            health_status: "perfect".to_string(),
            allergies: None,
            vet_name: None,
        }
    }

    #[test]
    fn test_new_pet_defaults_optional_fields() {
        let pet = Pet::new(config());
        assert_eq!(pet.allergies, "None");
        assert_eq!(pet.vet_name, "");
        assert_eq!(pet.created_at, pet.updated_at);
    }

    #[test]
    fn test_blank_allergies_become_none() {
        let pet = Pet::new(PetConfig {
            allergies: Some("  ".to_string()),
            vet_name: Some("Dr. Michael Chen".to_string()),
            ..config()
        });
        assert_eq!(pet.allergies, "None");
        assert_eq!(pet.vet_name, "Dr. Michael Chen");
    }
}
