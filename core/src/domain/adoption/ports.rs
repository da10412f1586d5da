use std::future::Future;

use crate::domain::{
    adoption::{
        entities::{AdoptionListing, AdoptionStatus},
        value_objects::{GetAdoptionsFilter, RegisterAdoptionInput},
    },
    common::entities::app_errors::CoreError,
};

/// Repository trait for adoption listings
#[cfg_attr(test, mockall::automock)]
pub trait AdoptionRepository: Send + Sync {
    fn create_listing(
        &self,
        listing: AdoptionListing,
    ) -> impl Future<Output = Result<AdoptionListing, CoreError>> + Send;

    fn get_listings(
        &self,
        filter: GetAdoptionsFilter,
    ) -> impl Future<Output = Result<Vec<AdoptionListing>, CoreError>> + Send;

    fn count_by_status(
        &self,
        status: AdoptionStatus,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn count_all(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// Service trait for adoption listings
pub trait AdoptionService: Send + Sync {
    fn register_for_adoption(
        &self,
        input: RegisterAdoptionInput,
    ) -> impl Future<Output = Result<AdoptionListing, CoreError>> + Send;

    fn get_adoption_listings(
        &self,
        filter: GetAdoptionsFilter,
    ) -> impl Future<Output = Result<Vec<AdoptionListing>, CoreError>> + Send;
}
