//! Connection bootstrap and schema migration.
//!
//! The connection is created once by the binary and passed into the router
//! state; nothing in the query layer holds or creates connections itself.

pub mod migration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

pub use migration::Migrator;

/// Connect and bring the schema up to date.
///
/// # Errors
/// Returns the storage error if the connection or a migration fails.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    tracing::info!(backend = ?db.get_database_backend(), "Connected to database");

    Migrator::up(&db, None).await?;
    Ok(db)
}
