pub mod create_pet;
pub mod get_pet;
pub mod get_pet_diet_plan;
pub mod get_pets;
