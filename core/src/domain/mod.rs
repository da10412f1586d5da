pub mod adoption;
pub mod appointment;
pub mod common;
pub mod dashboard;
pub mod diet_plan;
pub mod health;
pub mod pet;
