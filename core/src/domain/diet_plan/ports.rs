use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::{
        entities::{GeneratedDietPlan, SavedDietPlan},
        value_objects::{GenerateDietPlanInput, GetDietPlansFilter, SaveDietPlanInput},
    },
};

/// Repository trait for saved diet plans
#[cfg_attr(test, mockall::automock)]
pub trait DietPlanRepository: Send + Sync {
    fn create_plan(
        &self,
        plan: SavedDietPlan,
    ) -> impl Future<Output = Result<SavedDietPlan, CoreError>> + Send;

    fn get_by_id(
        &self,
        plan_id: Uuid,
        owner_id: Uuid,
    ) -> impl Future<Output = Result<Option<SavedDietPlan>, CoreError>> + Send;

    fn get_by_owner(
        &self,
        owner_id: Uuid,
        filter: GetDietPlansFilter,
    ) -> impl Future<Output = Result<Vec<SavedDietPlan>, CoreError>> + Send;

    /// Returns `false` when nothing matched.
    fn delete_plan(
        &self,
        plan_id: Uuid,
        owner_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn count_by_owner(&self, owner_id: Uuid)
    -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// Service trait for diet plan generation and saved plans
pub trait DietPlanService: Send + Sync {
    fn generate_diet_plan(&self, input: GenerateDietPlanInput) -> GeneratedDietPlan;

    fn generate_pet_diet_plan(
        &self,
        owner_id: Uuid,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<GeneratedDietPlan, CoreError>> + Send;

    fn save_diet_plan(
        &self,
        input: SaveDietPlanInput,
    ) -> impl Future<Output = Result<SavedDietPlan, CoreError>> + Send;

    fn get_diet_plans(
        &self,
        owner_id: Uuid,
        filter: GetDietPlansFilter,
    ) -> impl Future<Output = Result<Vec<SavedDietPlan>, CoreError>> + Send;

    fn get_diet_plan(
        &self,
        owner_id: Uuid,
        plan_id: Uuid,
    ) -> impl Future<Output = Result<SavedDietPlan, CoreError>> + Send;

    fn delete_diet_plan(
        &self,
        owner_id: Uuid,
        plan_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
