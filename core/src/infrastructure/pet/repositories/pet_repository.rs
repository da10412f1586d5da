use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pet::{entities::Pet, ports::PetRepository, value_objects::GetPetsFilter},
    },
    entity::pets::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct SqlitePetRepository {
    pub db: DatabaseConnection,
}

impl SqlitePetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PetRepository for SqlitePetRepository {
    async fn create_pet(&self, pet: Pet) -> Result<Pet, CoreError> {
        let active_model = ActiveModel {
            id: Set(pet.id),
            owner_id: Set(pet.owner_id),
            name: Set(pet.name.clone()),
            kind: Set(pet.kind.clone()),
            breed: Set(pet.breed.clone()),
            gender: Set(pet.gender.clone()),
            age: Set(pet.age.clone()),
            weight: Set(pet.weight.clone()),
            health_status: Set(pet.health_status.clone()),
            allergies: Set(pet.allergies.clone()),
            vet_name: Set(pet.vet_name.clone()),
            created_at: Set(pet.created_at.fixed_offset()),
            updated_at: Set(pet.updated_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create pet: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(pet)
    }

    async fn get_by_id(&self, pet_id: Uuid, owner_id: Uuid) -> Result<Option<Pet>, CoreError> {
        let pet = Entity::find()
            .filter(Column::Id.eq(pet_id))
            .filter(Column::OwnerId.eq(owner_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get pet: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(pet.map(Pet::from))
    }

    async fn get_by_name(&self, name: String, owner_id: Uuid) -> Result<Option<Pet>, CoreError> {
        let pet = Entity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .filter(Column::Name.eq(name))
            .order_by(Column::CreatedAt, Order::Asc)
            .order_by(Column::Id, Order::Asc)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get pet by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(pet.map(Pet::from))
    }

    async fn get_by_owner(
        &self,
        owner_id: Uuid,
        filter: GetPetsFilter,
    ) -> Result<Vec<Pet>, CoreError> {
        let mut query = Entity::find().filter(Column::OwnerId.eq(owner_id));

        if let Some(ref kind) = filter.kind {
            query = query.filter(Column::Kind.eq(kind.clone()));
        }

        // Apply sorting
        let mut sorted = false;
        if let Some(ref sort_str) = filter.sort {
            for sort_part in sort_str.split(',') {
                let sort_part = sort_part.trim();
                let (field, order) = match sort_part.strip_prefix('-') {
                    Some(field) => (field, Order::Desc),
                    None => (sort_part, Order::Asc),
                };

                let column = match field {
                    "name" => Column::Name,
                    "kind" => Column::Kind,
                    "created_at" => Column::CreatedAt,
                    _ => continue,
                };
                query = query.order_by(column, order.clone());
                if matches!(column, Column::CreatedAt) {
                    query = query.order_by(Column::Id, order);
                }
                sorted = true;
            }
        }
        if !sorted {
            query = query
                .order_by(Column::CreatedAt, Order::Asc)
                .order_by(Column::Id, Order::Asc);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        let pets = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get pets: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(pets.into_iter().map(Pet::from).collect())
    }

    async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, CoreError> {
        Entity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count pets: {}", e);
                CoreError::InternalServerError
            })
    }
}
