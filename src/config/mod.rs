pub mod auth_options;
pub mod cors_config;
pub mod database_config;
pub mod defaults;
pub mod environment;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use thiserror::Error;

pub use auth_options::AuthOptions;
pub use cors_config::AllowedOriginsConfig;
pub use database_config::DatabaseConfig;
pub use environment::Environment;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("unknown environment '{0}', expected 'production' or 'development'")]
    UnknownEnvironment(String),

    #[error("database connection string 'ConnectionStrings:TemplateAppDB' is not configured")]
    MissingConnectionString,

    #[error("invalid database connection string: {0}")]
    InvalidConnectionString(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "defaults::default_host")]
    pub host: String,
    #[serde(default = "defaults::default_port")]
    pub port: u16,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub allowed_origins: Option<AllowedOriginsConfig>,
    /// Overrides the mode-derived authentication decision when set.
    #[serde(default)]
    pub authentication_enabled: Option<bool>,
    #[serde(default)]
    pub auth: AuthOptions,
    #[serde(default)]
    pub azure_client_id: Option<String>,
    #[serde(default = "defaults::default_api_docs_enabled")]
    pub api_docs_enabled: bool,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_logging_level")]
    pub level: String,
    #[serde(default = "defaults::default_logging_json_format")]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_logging_level(),
            json_format: defaults::default_logging_json_format(),
        }
    }
}

impl AppConfig {
    /// Loads `config/default.toml`, then `config/<environment>.toml`, then the
    /// process environment, later sources winning.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Self::resolve_environment()?;

        let figment = with_environment_overrides(
            Figment::new()
                .merge(Toml::file("config/default.toml"))
                .merge(Toml::file(format!("config/{}.toml", environment.as_str()))),
        );

        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let mut config: Self = figment.extract().map_err(Box::new)?;

        config.azure_client_id = defaults::normalize_optional_string(config.azure_client_id);

        Ok(config)
    }

    fn resolve_environment() -> Result<Environment, ConfigError> {
        let figment =
            with_environment_overrides(Figment::new().merge(Toml::file("config/default.toml")));

        match figment.extract_inner::<Environment>("environment") {
            Ok(environment) => Ok(environment),
            Err(err) if err.missing() => Ok(Environment::default()),
            Err(err) => Err(ConfigError::Load(Box::new(err))),
        }
    }
}

fn with_environment_overrides(figment: Figment) -> Figment {
    figment
        .merge(Env::prefixed("APP_").split("__"))
        .merge(Env::prefixed("AUTH__").map(|key| auth_option_key(key.as_str()).into()))
        .merge(
            Env::raw()
                .only(&[
                    "PORT",
                    "DATABASE_URL",
                    "CONNECTIONSTRINGS__TEMPLATEAPPDB",
                    "ALLOWED_ORIGINS",
                    "ALLOWEDORIGINS",
                    "AUTHENTICATION_ENABLED",
                    "AUTHENTICATIONENABLED",
                    "AZURE_CLIENT_ID",
                ])
                .map(|key| match canonical_key(key.as_str()) {
                    Some(mapped) => mapped.into(),
                    None => key.into(),
                }),
        )
}

/// `Auth__SigningKey` and `AUTH__SIGNING_KEY` both land on `auth.signing_key`.
fn auth_option_key(env_key: &str) -> String {
    let field = match env_key.replace('_', "").to_ascii_lowercase().as_str() {
        "signingkey" => "signing_key".to_string(),
        "leewayseconds" => "leeway_seconds".to_string(),
        _ => env_key.to_ascii_lowercase(),
    };
    format!("auth.{field}")
}

fn canonical_key(env_key: &str) -> Option<&'static str> {
    match env_key.to_ascii_uppercase().as_str() {
        "PORT" => Some("port"),
        "DATABASE_URL" | "CONNECTIONSTRINGS__TEMPLATEAPPDB" => Some("database.url"),
        "ALLOWED_ORIGINS" | "ALLOWEDORIGINS" => Some("allowed_origins"),
        "AUTHENTICATION_ENABLED" | "AUTHENTICATIONENABLED" => Some("authentication_enabled"),
        "AZURE_CLIENT_ID" => Some("azure_client_id"),
        _ => None,
    }
}
