use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        diet_plan::{
            entities::SavedDietPlan, ports::DietPlanRepository, value_objects::GetDietPlansFilter,
        },
    },
    entity::diet_plans::{ActiveModel, Column, Entity},
    infrastructure::diet_plan::mappers::serialize_plan,
};

#[derive(Debug, Clone)]
pub struct SqliteDietPlanRepository {
    pub db: DatabaseConnection,
}

impl SqliteDietPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DietPlanRepository for SqliteDietPlanRepository {
    async fn create_plan(&self, plan: SavedDietPlan) -> Result<SavedDietPlan, CoreError> {
        let active_model = ActiveModel {
            id: Set(plan.id),
            owner_id: Set(plan.owner_id),
            pet_name: Set(plan.pet_name.clone()),
            age: Set(plan.age.clone()),
            breed: Set(plan.breed.clone()),
            condition: Set(plan.condition.clone()),
            plan: Set(serialize_plan(&plan.plan)?),
            created_at: Set(plan.created_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create diet plan: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(plan)
    }

    async fn get_by_id(
        &self,
        plan_id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<SavedDietPlan>, CoreError> {
        let plan = Entity::find()
            .filter(Column::Id.eq(plan_id))
            .filter(Column::OwnerId.eq(owner_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get diet plan: {}", e);
                CoreError::InternalServerError
            })?;

        plan.map(SavedDietPlan::try_from).transpose()
    }

    async fn get_by_owner(
        &self,
        owner_id: Uuid,
        filter: GetDietPlansFilter,
    ) -> Result<Vec<SavedDietPlan>, CoreError> {
        let mut query = Entity::find().filter(Column::OwnerId.eq(owner_id));

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
                    "pet_name" => Column::PetName,
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
                .order_by(Column::CreatedAt, Order::Desc)
                .order_by(Column::Id, Order::Desc);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        let plans = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get diet plans: {}", e);
            CoreError::InternalServerError
        })?;

        plans.into_iter().map(SavedDietPlan::try_from).collect()
    }

    async fn delete_plan(&self, plan_id: Uuid, owner_id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(plan_id))
            .filter(Column::OwnerId.eq(owner_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete diet plan: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }

    async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, CoreError> {
        Entity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count diet plans: {}", e);
                CoreError::InternalServerError
            })
    }
}
