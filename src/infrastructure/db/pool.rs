use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};

use super::connection_string::{DatabaseConnection, NormalizedConnectionParams, SslMode};
use crate::config::{ConfigError, DatabaseConfig};

/// Builds the pool without opening a connection; the first real connection is
/// made by the migration step.
pub fn create_pool(options: PgConnectOptions, config: &DatabaseConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .max_lifetime(Duration::from_secs(config.max_lifetime_seconds))
        .connect_lazy_with(options)
}

pub fn connect_options(connection: &DatabaseConnection) -> Result<PgConnectOptions, ConfigError> {
    match connection {
        DatabaseConnection::Params(params) => Ok(params_options(params)),
        DatabaseConnection::KeyValue(raw) => key_value_options(raw),
    }
}

fn params_options(params: &NormalizedConnectionParams) -> PgConnectOptions {
    // `Require` encrypts without verifying the certificate chain, which is what
    // trusting the server certificate amounts to.
    PgConnectOptions::new()
        .host(&params.host)
        .port(params.port)
        .database(&params.database)
        .username(&params.username)
        .password(&params.password)
        .ssl_mode(pg_ssl_mode(params.ssl_mode))
}

fn key_value_options(raw: &str) -> Result<PgConnectOptions, ConfigError> {
    let mut options = PgConnectOptions::new();

    for pair in raw.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| invalid("expected 'Key=Value' pairs separated by ';'"))?;
        let value = value.trim();

        options = match normalize_key(key).as_str() {
            "host" | "server" => options.host(value),
            "port" => options.port(
                value
                    .parse()
                    .map_err(|_| invalid("Port must be a number between 0 and 65535"))?,
            ),
            "database" => options.database(value),
            "username" | "userid" | "user" => options.username(value),
            "password" => options.password(value),
            "sslmode" => options.ssl_mode(pg_ssl_mode(parse_ssl_mode(value)?)),
            _ => options,
        };
    }

    Ok(options)
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn parse_ssl_mode(value: &str) -> Result<SslMode, ConfigError> {
    match normalize_key(value).as_str() {
        "disable" => Ok(SslMode::Disable),
        "prefer" => Ok(SslMode::Prefer),
        "require" => Ok(SslMode::Require),
        _ => Err(invalid(
            "SSL Mode must be one of 'Disable', 'Prefer' or 'Require'",
        )),
    }
}

fn pg_ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
    }
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::InvalidConnectionString(reason.to_string())
}
