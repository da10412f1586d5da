use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    adoption::ports::AdoptionRepository,
    appointment::ports::AppointmentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::{
        entities::{GeneratedDietPlan, SavedDietPlan, SavedDietPlanConfig},
        ports::{DietPlanRepository, DietPlanService},
        rules::generate,
        value_objects::{GenerateDietPlanInput, GetDietPlansFilter, PetProfile, SaveDietPlanInput},
    },
    health::ports::HealthCheckRepository,
    pet::ports::PetRepository,
};

/// Runs the rule engine and records how the profile was read.
pub fn generate_for_profile(profile: &PetProfile) -> GeneratedDietPlan {
    GeneratedDietPlan {
        pet_name: profile.name.clone(),
        age_tier: profile.age.tier(),
        condition: profile.condition.to_string(),
        condition_recognized: profile.condition.is_recognized(),
        plan: generate(profile),
    }
}

impl<P, AP, AD, DP, HC> DietPlanService for Service<P, AP, AD, DP, HC>
where
    P: PetRepository,
    AP: AppointmentRepository,
    AD: AdoptionRepository,
    DP: DietPlanRepository,
    HC: HealthCheckRepository,
{
    fn generate_diet_plan(&self, input: GenerateDietPlanInput) -> GeneratedDietPlan {
        let profile = PetProfile::new(&input.pet_name, &input.age, &input.breed, &input.condition);

        if !profile.condition.is_recognized() {
            warn!(
                condition = %profile.condition,
                "unrecognized condition, no condition rules applied"
            );
        }

        let generated = generate_for_profile(&profile);
        info!(
            pet_name = %generated.pet_name,
            age_tier = ?generated.age_tier,
            "generated diet plan"
        );

        generated
    }

    async fn generate_pet_diet_plan(
        &self,
        owner_id: Uuid,
        pet_id: Uuid,
    ) -> Result<GeneratedDietPlan, CoreError> {
        let pet = self
            .pet_repository
            .get_by_id(pet_id, owner_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        // Stored health status doubles as the condition ("good", "excellent"
        // simply match no condition rule).
        let profile = PetProfile::new(&pet.name, &pet.age, &pet.breed, &pet.health_status);

        Ok(generate_for_profile(&profile))
    }

    async fn save_diet_plan(&self, input: SaveDietPlanInput) -> Result<SavedDietPlan, CoreError> {
        let generated = self.generate_diet_plan(GenerateDietPlanInput {
            pet_name: input.pet_name.clone(),
            age: input.age.clone(),
            breed: input.breed.clone(),
            condition: input.condition.clone(),
        });

        let saved = SavedDietPlan::new(SavedDietPlanConfig {
            owner_id: input.owner_id,
            pet_name: input.pet_name,
            age: input.age,
            breed: input.breed,
            condition: input.condition,
            plan: generated.plan,
        });

        let saved = self.diet_plan_repository.create_plan(saved).await?;
        info!(plan_id = %saved.id, pet_name = %saved.pet_name, "saved diet plan");

        Ok(saved)
    }

    async fn get_diet_plans(
        &self,
        owner_id: Uuid,
        filter: GetDietPlansFilter,
    ) -> Result<Vec<SavedDietPlan>, CoreError> {
        self.diet_plan_repository
            .get_by_owner(owner_id, filter)
            .await
    }

    async fn get_diet_plan(
        &self,
        owner_id: Uuid,
        plan_id: Uuid,
    ) -> Result<SavedDietPlan, CoreError> {
        self.diet_plan_repository
            .get_by_id(plan_id, owner_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn delete_diet_plan(&self, owner_id: Uuid, plan_id: Uuid) -> Result<(), CoreError> {
        let deleted = self
            .diet_plan_repository
            .delete_plan(plan_id, owner_id)
            .await?;

        if !deleted {
            return Err(CoreError::NotFound);
        }

        info!(plan_id = %plan_id, "deleted diet plan");
        Ok(())
    }
}
