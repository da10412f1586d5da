use tracing::info;

use crate::domain::{
    adoption::{
        entities::{AdoptionListing, AdoptionListingConfig},
        ports::{AdoptionRepository, AdoptionService},
        value_objects::{GetAdoptionsFilter, RegisterAdoptionInput},
    },
    appointment::ports::AppointmentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::ports::DietPlanRepository,
    health::ports::HealthCheckRepository,
    pet::ports::PetRepository,
};

impl<P, AP, AD, DP, HC> AdoptionService for Service<P, AP, AD, DP, HC>
where
    P: PetRepository,
    AP: AppointmentRepository,
    AD: AdoptionRepository,
    DP: DietPlanRepository,
    HC: HealthCheckRepository,
{
    async fn register_for_adoption(
        &self,
        input: RegisterAdoptionInput,
    ) -> Result<AdoptionListing, CoreError> {
        if input.has_missing_fields() {
            return Err(CoreError::Invalid("Missing required fields".to_string()));
        }

        let listing = AdoptionListing::new(AdoptionListingConfig {
            name: input.name,
            breed: input.breed,
            gender: input.gender,
            age: input.age,
            shelter: input.shelter,
            contact_phone: input.contact_phone,
        });

        let listing = self.adoption_repository.create_listing(listing).await?;
        info!(listing_id = %listing.id, shelter = %listing.shelter, "pet registered for adoption");

        Ok(listing)
    }

    async fn get_adoption_listings(
        &self,
        filter: GetAdoptionsFilter,
    ) -> Result<Vec<AdoptionListing>, CoreError> {
        self.adoption_repository.get_listings(filter).await
    }
}
