pub mod mappers;
pub mod repositories;

pub use repositories::pet_repository::SqlitePetRepository;
