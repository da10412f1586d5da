use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePetValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Species, e.g. "Dog" or "Cat".
    #[validate(length(min = 1, message = "kind is required"))]
    pub kind: String,

    #[validate(length(min = 1, message = "breed is required"))]
    pub breed: String,

    #[validate(length(min = 1, message = "gender is required"))]
    pub gender: String,

    #[validate(length(min = 1, message = "age is required"))]
    pub age: String,

    #[validate(length(min = 1, message = "weight is required"))]
    pub weight: String,

    #[validate(length(min = 1, message = "health_status is required"))]
    pub health_status: String,

    #[serde(default)]
    pub allergies: Option<String>,

    #[serde(default)]
    pub vet_name: Option<String>,
}
