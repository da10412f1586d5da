use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Missing fields deserialize as empty and are rejected together with
/// "Missing required fields".
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct RegisterAdoptionValidator {
    pub name: String,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub shelter: String,
    pub contact_phone: String,
}
