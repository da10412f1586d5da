pub mod adoption;
pub mod appointment;
pub mod dashboard;
pub mod diet_plan;
pub mod health;
pub mod pet;
pub mod query_extractor;
pub mod query_params;
pub mod server;
