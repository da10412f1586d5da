pub mod mappers;
pub mod repositories;

pub use repositories::adoption_repository::SqliteAdoptionRepository;
