use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pet::{
        entities::Pet,
        value_objects::{CreatePetInput, GetPetsFilter},
    },
};

/// Repository trait for pet records
#[cfg_attr(test, mockall::automock)]
pub trait PetRepository: Send + Sync {
    fn create_pet(&self, pet: Pet) -> impl Future<Output = Result<Pet, CoreError>> + Send;

    fn get_by_id(
        &self,
        pet_id: Uuid,
        owner_id: Uuid,
    ) -> impl Future<Output = Result<Option<Pet>, CoreError>> + Send;

    /// Case-sensitive exact match, first created wins when names repeat.
    fn get_by_name(
        &self,
        name: String,
        owner_id: Uuid,
    ) -> impl Future<Output = Result<Option<Pet>, CoreError>> + Send;

    fn get_by_owner(
        &self,
        owner_id: Uuid,
        filter: GetPetsFilter,
    ) -> impl Future<Output = Result<Vec<Pet>, CoreError>> + Send;

    fn count_by_owner(&self, owner_id: Uuid)
    -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// Service trait for pet records
pub trait PetService: Send + Sync {
    fn create_pet(&self, input: CreatePetInput)
    -> impl Future<Output = Result<Pet, CoreError>> + Send;

    fn get_pets(
        &self,
        owner_id: Uuid,
        filter: GetPetsFilter,
    ) -> impl Future<Output = Result<Vec<Pet>, CoreError>> + Send;

    fn get_pet(
        &self,
        owner_id: Uuid,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<Pet, CoreError>> + Send;
}
