pub mod delete_diet_plan;
pub mod generate_diet_plan;
pub mod get_diet_plan;
pub mod get_diet_plans;
pub mod save_diet_plan;
