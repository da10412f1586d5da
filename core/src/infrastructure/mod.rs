pub mod adoption;
pub mod appointment;
pub mod db;
pub mod diet_plan;
pub mod health;
pub mod pet;
