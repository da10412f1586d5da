use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        appointment::{
            entities::{Appointment, AppointmentStatus},
            ports::AppointmentRepository,
            value_objects::GetAppointmentsFilter,
        },
        common::entities::app_errors::CoreError,
    },
    entity::appointments::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct SqliteAppointmentRepository {
    pub db: DatabaseConnection,
}

impl SqliteAppointmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AppointmentRepository for SqliteAppointmentRepository {
    async fn create_appointment(&self, appointment: Appointment) -> Result<Appointment, CoreError> {
        let active_model = ActiveModel {
            id: Set(appointment.id),
            owner_id: Set(appointment.owner_id),
            pet_id: Set(appointment.pet_id),
            doctor_name: Set(appointment.doctor_name.clone()),
            hospital_name: Set(appointment.hospital_name.clone()),
            date: Set(appointment.date.clone()),
            time: Set(appointment.time.clone()),
            reason: Set(appointment.reason.clone()),
            status: Set(appointment.status.to_string()),
            created_at: Set(appointment.created_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create appointment: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(appointment)
    }

    async fn get_by_owner(
        &self,
        owner_id: Uuid,
        filter: GetAppointmentsFilter,
    ) -> Result<Vec<Appointment>, CoreError> {
        let mut query = Entity::find().filter(Column::OwnerId.eq(owner_id));

        if let Some(ref status) = filter.status {
            query = query.filter(Column::Status.eq(status.clone()));
        }

        query = query
            .order_by(Column::Date, Order::Desc)
            .order_by(Column::Time, Order::Desc);

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        let appointments = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get appointments: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(appointments.into_iter().map(Appointment::from).collect())
    }

    async fn count_by_owner_and_status(
        &self,
        owner_id: Uuid,
        status: AppointmentStatus,
    ) -> Result<u64, CoreError> {
        Entity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .filter(Column::Status.eq(status.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count appointments: {}", e);
                CoreError::InternalServerError
            })
    }
}
