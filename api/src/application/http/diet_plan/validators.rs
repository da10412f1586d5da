use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Pet profile the plan is generated from. Age and condition are free text:
/// "puppy", "3", "10 years"; "overweight", "kidney disease".
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DietPlanValidator {
    #[validate(length(min = 1, message = "pet_name is required"))]
    pub pet_name: String,

    #[validate(length(min = 1, message = "age is required"))]
    pub age: String,

    #[validate(length(min = 1, message = "breed is required"))]
    pub breed: String,

    #[validate(length(min = 1, message = "condition is required"))]
    pub condition: String,
}
