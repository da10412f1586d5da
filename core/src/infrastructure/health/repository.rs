use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, health::ports::HealthCheckRepository};

#[derive(Debug, Clone)]
pub struct SqliteHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl SqliteHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for SqliteHealthCheckRepository {
    async fn ping(&self) -> Result<u64, CoreError> {
        let started = Instant::now();

        self.db
            .query_one(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1",
            ))
            .await
            .map_err(|e| {
                error!("Database health check failed: {}", e);
                CoreError::ServiceUnavailable(e.to_string())
            })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}
