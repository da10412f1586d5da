use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        diet_plan::entities::{DietPlan, SavedDietPlan},
    },
    entity::diet_plans,
};

impl TryFrom<diet_plans::Model> for SavedDietPlan {
    type Error = CoreError;

    fn try_from(model: diet_plans::Model) -> Result<Self, Self::Error> {
        let plan: DietPlan = serde_json::from_str(&model.plan).map_err(|e| {
            error!(plan_id = %model.id, "Stored diet plan is not valid JSON: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            id: model.id,
            owner_id: model.owner_id,
            pet_name: model.pet_name,
            age: model.age,
            breed: model.breed,
            condition: model.condition,
            plan,
            created_at: model.created_at.to_utc(),
        })
    }
}

pub fn serialize_plan(plan: &DietPlan) -> Result<String, CoreError> {
    serde_json::to_string(plan).map_err(|e| {
        error!("Failed to serialize diet plan: {}", e);
        CoreError::InternalServerError
    })
}
