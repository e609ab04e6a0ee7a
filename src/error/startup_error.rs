use thiserror::Error;

use crate::config::ConfigError;

/// Fatal failures raised while preparing the application; `main` reports the
/// chain and exits non-zero.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error")]
    Configuration(#[from] ConfigError),

    #[error("invalid authentication options")]
    Validation(#[from] validator::ValidationErrors),

    #[error("database migration failed")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("HTTP server failed")]
    Server(#[from] std::io::Error),
}
