pub mod mappers;
pub mod repositories;

pub use repositories::diet_plan_repository::SqliteDietPlanRepository;
