use tracing::info;
use uuid::Uuid;

use crate::domain::{
    adoption::ports::AdoptionRepository,
    appointment::ports::AppointmentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::ports::DietPlanRepository,
    health::ports::HealthCheckRepository,
    pet::{
        entities::{Pet, PetConfig},
        ports::{PetRepository, PetService},
        value_objects::{CreatePetInput, GetPetsFilter},
    },
};

impl<P, AP, AD, DP, HC> PetService for Service<P, AP, AD, DP, HC>
where
    P: PetRepository,
    AP: AppointmentRepository,
    AD: AdoptionRepository,
    DP: DietPlanRepository,
    HC: HealthCheckRepository,
{
    async fn create_pet(&self, input: CreatePetInput) -> Result<Pet, CoreError> {
        let pet = Pet::new(PetConfig {
            owner_id: input.owner_id,
            name: input.name,
            kind: input.kind,
            breed: input.breed,
            gender: input.gender,
            age: input.age,
            weight: input.weight,
            health_status: input.health_status,
            allergies: input.allergies,
            vet_name: input.vet_name,
        });

        let pet = self.pet_repository.create_pet(pet).await?;
        info!(pet_id = %pet.id, name = %pet.name, "pet added");

        Ok(pet)
    }

    async fn get_pets(&self, owner_id: Uuid, filter: GetPetsFilter) -> Result<Vec<Pet>, CoreError> {
        self.pet_repository.get_by_owner(owner_id, filter).await
    }

    async fn get_pet(&self, owner_id: Uuid, pet_id: Uuid) -> Result<Pet, CoreError> {
        self.pet_repository
            .get_by_id(pet_id, owner_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
