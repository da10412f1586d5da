use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{
        adoption::{
            entities::{AdoptionListing, AdoptionListingConfig},
            ports::AdoptionRepository,
        },
        common::{PawcareConfig, entities::app_errors::CoreError, services::Service},
        pet::{
            entities::{Pet, PetConfig},
            ports::PetRepository,
        },
    },
    infrastructure::{
        adoption::SqliteAdoptionRepository,
        appointment::SqliteAppointmentRepository,
        db::sqlite::{Sqlite, SqliteConfig},
        diet_plan::SqliteDietPlanRepository,
        health::SqliteHealthCheckRepository,
        pet::SqlitePetRepository,
    },
};

pub type PawcareService = Service<
    SqlitePetRepository,
    SqliteAppointmentRepository,
    SqliteAdoptionRepository,
    SqliteDietPlanRepository,
    SqliteHealthCheckRepository,
>;

pub async fn create_service(config: PawcareConfig) -> Result<PawcareService, anyhow::Error> {
    let sqlite = Sqlite::new(SqliteConfig {
        database_url: config.database.url.clone(),
    })
    .await?;
    let db = sqlite.get_db();

    let service = Service::new(
        SqlitePetRepository::new(db.clone()),
        SqliteAppointmentRepository::new(db.clone()),
        SqliteAdoptionRepository::new(db.clone()),
        SqliteDietPlanRepository::new(db.clone()),
        SqliteHealthCheckRepository::new(db),
    );

    if config.demo.seed_data {
        seed_demo_data(&service, config.demo.owner_id).await?;
    }

    Ok(service)
}

struct DemoPet {
    name: &'static str,
    kind: &'static str,
    breed: &'static str,
    gender: &'static str,
    age: &'static str,
    weight: &'static str,
    health_status: &'static str,
    allergies: &'static str,
    vet_name: &'static str,
    shelter: &'static str,
    contact_phone: &'static str,
}

const DEMO_PETS: [DemoPet; 3] = [
    DemoPet {
        name: "Buddy",
        kind: "Dog",
        breed: "Golden Retriever",
        gender: "Male",
        age: "2 years",
        weight: "28 kg",
        health_status: "excellent",
        allergies: "None",
        vet_name: "Dr. Sarah Johnson",
        shelter: "Happy Paws Rescue",
        contact_phone: "+1 (555) 123-4567",
    },
    DemoPet {
        name: "Luna",
        kind: "Cat",
        breed: "Persian Cat",
        gender: "Female",
        age: "1.5 years",
        weight: "4.2 kg",
        health_status: "perfect",
        allergies: "Chicken protein",
        vet_name: "Dr. Michael Chen",
        shelter: "Whiskers & Tails",
        contact_phone: "+1 (555) 987-6543",
    },
    DemoPet {
        name: "Max",
        kind: "Dog",
        breed: "Labrador Mix",
        gender: "Male",
        age: "3 years",
        weight: "32 kg",
        health_status: "good",
        allergies: "Flea medication",
        vet_name: "Dr. Emily Rodriguez",
        shelter: "Bay Area Animal Rescue",
        contact_phone: "+1 (555) 456-7890",
    },
];

/// Inserts the sample pets for `owner_id` and the sample adoption listings,
/// each only when the respective table has nothing yet.
pub async fn seed_demo_data(service: &PawcareService, owner_id: Uuid) -> Result<(), CoreError> {
    if service.pet_repository.count_by_owner(owner_id).await? == 0 {
        for demo in &DEMO_PETS {
            service
                .pet_repository
                .create_pet(Pet::new(PetConfig {
                    owner_id,
                    name: demo.name.to_string(),
                    kind: demo.kind.to_string(),
                    breed: demo.breed.to_string(),
                    gender: demo.gender.to_string(),
                    age: demo.age.to_string(),
                    weight: demo.weight.to_string(),
                    health_status: demo.health_status.to_string(),
                    allergies: Some(demo.allergies.to_string()),
                    vet_name: Some(demo.vet_name.to_string()),
                }))
                .await?;
        }
        info!(owner_id = %owner_id, "seeded demo pets");
    }

    if service.adoption_repository.count_all().await? == 0 {
        for demo in &DEMO_PETS {
            service
                .adoption_repository
                .create_listing(AdoptionListing::new(AdoptionListingConfig {
                    name: demo.name.to_string(),
                    breed: demo.breed.to_string(),
                    gender: demo.gender.to_string(),
                    age: demo.age.to_string(),
                    shelter: demo.shelter.to_string(),
                    contact_phone: demo.contact_phone.to_string(),
                }))
                .await?;
        }
        info!("seeded demo adoption listings");
    }

    Ok(())
}

#[cfg(test)]
mod tests;
