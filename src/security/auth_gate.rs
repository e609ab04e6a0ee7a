use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::config::{AuthOptions, Environment};
use crate::error::StartupError;

/// Whether bearer authentication is wired for this process.
#[derive(Debug, Clone)]
pub enum AuthenticationState {
    /// Every caller is treated as an authenticated anonymous principal.
    Disabled,
    /// HS256 bearer tokens are required on protected endpoints.
    Bearer(Arc<AuthOptions>),
}

impl AuthenticationState {
    pub fn is_enabled(&self) -> bool {
        matches!(self, AuthenticationState::Bearer(_))
    }

    pub fn options(&self) -> Option<&AuthOptions> {
        match self {
            AuthenticationState::Bearer(options) => Some(options),
            AuthenticationState::Disabled => None,
        }
    }
}

/// Production runs without authentication unless `authentication_enabled`
/// says otherwise; Development always validates options eagerly.
pub fn resolve_authentication(
    environment: Environment,
    authentication_enabled: Option<bool>,
    options: &AuthOptions,
) -> Result<AuthenticationState, StartupError> {
    let enabled = authentication_enabled.unwrap_or(environment.is_development());

    if !enabled {
        if environment.is_production() {
            warn!("authentication is disabled; all endpoints accept anonymous callers");
        } else {
            info!(environment = %environment, "authentication disabled by configuration");
        }
        return Ok(AuthenticationState::Disabled);
    }

    options.validate()?;

    info!(
        environment = %environment,
        issuer = %options.issuer,
        audience = %options.audience,
        "bearer authentication enabled"
    );
    Ok(AuthenticationState::Bearer(Arc::new(options.clone())))
}
