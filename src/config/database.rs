//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs without hand-written SQL.

use crate::entities::{Investment, Project};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

/// Establishes a connection to the database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database at {}", database_url);
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the project and investment tables if they do not exist yet.
///
/// `projects` is created first since `investments.project_id` references it.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut project_table = schema.create_table_from_entity(Project);
    let mut investment_table = schema.create_table_from_entity(Investment);

    project_table.if_not_exists();
    investment_table.if_not_exists();

    db.execute(builder.build(&project_table)).await?;
    db.execute(builder.build(&investment_table)).await?;

    info!("Database tables ready");
    Ok(())
}
