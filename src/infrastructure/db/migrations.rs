use async_trait::async_trait;
use sqlx::migrate::MigrateError;
use sqlx::PgPool;

/// Applies pending schema migrations. Startup takes this as a seam so a failing
/// migration can be simulated without a database.
#[async_trait]
pub trait SchemaMigrator: Send + Sync {
    async fn migrate(&self, pool: &PgPool) -> Result<(), MigrateError>;
}

/// Migrations compiled into the binary from `./migrations`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedMigrations;

#[async_trait]
impl SchemaMigrator for EmbeddedMigrations {
    async fn migrate(&self, pool: &PgPool) -> Result<(), MigrateError> {
        run_migrations(pool).await
    }
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    // Keep this module as the single embed point for sqlx migration files.
    sqlx::migrate!("./migrations").run(pool).await
}
