pub mod adoption_repository;
