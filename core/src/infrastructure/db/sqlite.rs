use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
};
use tracing::{debug, info};

use crate::entity::{adoptions, appointments, diet_plans, pets};

pub struct SqliteConfig {
    pub database_url: String,
}

#[derive(Clone)]
pub struct Sqlite {
    db: DatabaseConnection,
}

impl Sqlite {
    pub async fn new(config: SqliteConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options.sqlx_logging(false);

        // Every pooled connection to ":memory:" would open its own empty database.
        if config.database_url.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        }

        let db = Database::connect(options).await?;
        create_schema(&db).await?;
        info!("connected to sqlite database");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    debug!(table = entity.table_name(), "table ready");

    Ok(())
}

/// Creates missing tables. Appointments reference pets, so pets come first.
async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, pets::Entity).await?;
    create_table(db, &schema, appointments::Entity).await?;
    create_table(db, &schema, adoptions::Entity).await?;
    create_table(db, &schema, diet_plans::Entity).await?;

    Ok(())
}
