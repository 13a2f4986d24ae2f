use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::migrator::MigratorTrait;

use crate::Migrator;

/// Applies all pending migrations
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        tracing::debug!("Database schema up to date");
        return Ok(());
    }

    tracing::info!("Applying {} database migrations", pending.len());
    Migrator::up(db, None).await
}
