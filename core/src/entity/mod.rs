//! sea-orm table models. One file per table.

pub mod adoptions;
pub mod appointments;
pub mod diet_plans;
pub mod pets;
