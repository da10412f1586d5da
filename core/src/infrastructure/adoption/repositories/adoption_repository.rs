use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;

use crate::{
    domain::{
        adoption::{
            entities::{AdoptionListing, AdoptionStatus},
            ports::AdoptionRepository,
            value_objects::GetAdoptionsFilter,
        },
        common::entities::app_errors::CoreError,
    },
    entity::adoptions::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct SqliteAdoptionRepository {
    pub db: DatabaseConnection,
}

impl SqliteAdoptionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AdoptionRepository for SqliteAdoptionRepository {
    async fn create_listing(&self, listing: AdoptionListing) -> Result<AdoptionListing, CoreError> {
        let active_model = ActiveModel {
            id: Set(listing.id),
            name: Set(listing.name.clone()),
            breed: Set(listing.breed.clone()),
            gender: Set(listing.gender.clone()),
            age: Set(listing.age.clone()),
            status: Set(listing.status.to_string()),
            shelter: Set(listing.shelter.clone()),
            contact_phone: Set(listing.contact_phone.clone()),
            created_at: Set(listing.created_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create adoption listing: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(listing)
    }

    async fn get_listings(
        &self,
        filter: GetAdoptionsFilter,
    ) -> Result<Vec<AdoptionListing>, CoreError> {
        let mut query = Entity::find();

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        query = query
            .order_by(Column::CreatedAt, Order::Asc)
            .order_by(Column::Id, Order::Asc);

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        let listings = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get adoption listings: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(listings.into_iter().map(AdoptionListing::from).collect())
    }

    async fn count_by_status(&self, status: AdoptionStatus) -> Result<u64, CoreError> {
        Entity::find()
            .filter(Column::Status.eq(status.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count adoption listings: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn count_all(&self) -> Result<u64, CoreError> {
        Entity::find().count(&self.db).await.map_err(|e| {
            error!("Failed to count adoption listings: {}", e);
            CoreError::InternalServerError
        })
    }
}
