use sqlx::postgres::PgConnectOptions;
use tracing::info;

use crate::api::routes::HealthEndpoints;
use crate::config::{AppConfig, Environment};
use crate::error::StartupError;
use crate::infrastructure::db::{connect_options, normalize_connection_string, DatabaseConnection};
use crate::security::{
    resolve_authentication, resolve_cors_policy, AuthenticationState, CorsPolicyDecision,
};

/// Every mode-dependent startup decision, resolved once and shared read-only.
#[derive(Clone)]
pub struct StartupSettings {
    pub environment: Environment,
    pub database: DatabaseConnection,
    pub connect_options: PgConnectOptions,
    pub authentication: AuthenticationState,
    pub cors: CorsPolicyDecision,
    pub health: HealthEndpoints,
    pub api_docs_enabled: bool,
    pub exception_handler_enabled: bool,
}

// `PgConnectOptions` prints its password, so it is left out.
impl std::fmt::Debug for StartupSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StartupSettings")
            .field("environment", &self.environment)
            .field("database", &self.database)
            .field("authentication", &self.authentication)
            .field("cors", &self.cors)
            .field("health", &self.health)
            .field("api_docs_enabled", &self.api_docs_enabled)
            .field("exception_handler_enabled", &self.exception_handler_enabled)
            .finish_non_exhaustive()
    }
}

impl StartupSettings {
    pub fn resolve(config: &AppConfig) -> Result<Self, StartupError> {
        let environment = config.environment;
        info!(environment = %environment, "resolved environment");

        if environment.is_development() {
            // Only presence is logged; the id itself identifies a cloud principal.
            info!(
                azure_client_id_present = config.azure_client_id.is_some(),
                "managed identity client id"
            );
        }

        let database = normalize_connection_string(config.database.url.as_deref())?;
        match &database {
            DatabaseConnection::Params(params) => info!(
                host = %params.host,
                port = params.port,
                database = %params.database,
                "converted URL connection string"
            ),
            DatabaseConnection::KeyValue(_) => info!("using key-value connection string"),
        }
        // Parsed now so connection string errors precede auth validation.
        let connect_options = connect_options(&database)?;

        let authentication =
            resolve_authentication(environment, config.authentication_enabled, &config.auth)?;
        let cors = resolve_cors_policy(environment, config.allowed_origins.as_ref());

        let health = if environment.is_production() {
            HealthEndpoints::Probes
        } else {
            HealthEndpoints::PlatformDefault
        };

        Ok(Self {
            environment,
            database,
            connect_options,
            authentication,
            cors,
            health,
            api_docs_enabled: config.api_docs_enabled,
            exception_handler_enabled: !environment.is_development(),
        })
    }
}
