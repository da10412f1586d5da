use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, diet_plan::value_objects::AgeTier};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealSlot {
    pub time: String,
    pub name: String,
    pub amount: String,
}

impl MealSlot {
    pub fn new(time: &str, name: &str, amount: &str) -> Self {
        Self {
            time: time.to_string(),
            name: name.to_string(),
            amount: amount.to_string(),
        }
    }
}

/// Feeding recommendation for one pet.
///
/// Built by the rule engine. `Deserialize` exists only so the repository can
/// restore a saved plan from its stored JSON column; no request body is read
/// into this type. Everyone else reads through the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietPlan {
    pub(super) daily_amount: String,
    pub(super) calories: String,
    pub(super) meals_per_day: String,
    pub(super) meal_schedule: Vec<MealSlot>,
    pub(super) recommended_foods: Vec<String>,
    pub(super) avoid_foods: Vec<String>,
    pub(super) special_recommendations: Vec<String>,
    pub(super) important_notes: Vec<String>,
}

impl DietPlan {
    pub fn daily_amount(&self) -> &str {
        &self.daily_amount
    }

    pub fn calories(&self) -> &str {
        &self.calories
    }

    pub fn meals_per_day(&self) -> &str {
        &self.meals_per_day
    }

    pub fn meal_schedule(&self) -> &[MealSlot] {
        &self.meal_schedule
    }

    pub fn recommended_foods(&self) -> &[String] {
        &self.recommended_foods
    }

    pub fn avoid_foods(&self) -> &[String] {
        &self.avoid_foods
    }

    pub fn special_recommendations(&self) -> &[String] {
        &self.special_recommendations
    }

    pub fn important_notes(&self) -> &[String] {
        &self.important_notes
    }
}

/// A plan together with how the engine read the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedDietPlan {
    pub pet_name: String,
    pub age_tier: AgeTier,
    pub condition: String,
    pub condition_recognized: bool,
    pub plan: DietPlan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SavedDietPlan {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub pet_name: String,
    pub age: String,
    pub breed: String,
    pub condition: String,
    pub plan: DietPlan,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SavedDietPlanConfig {
    pub owner_id: Uuid,
    pub pet_name: String,
    pub age: String,
    pub breed: String,
    pub condition: String,
    pub plan: DietPlan,
}

impl SavedDietPlan {
    pub fn new(config: SavedDietPlanConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            owner_id: config.owner_id,
            pet_name: config.pet_name,
            age: config.age,
            breed: config.breed,
            condition: config.condition,
            plan: config.plan,
            created_at: now,
        }
    }
}
