pub mod get_adoption_listings;
pub mod register_for_adoption;
