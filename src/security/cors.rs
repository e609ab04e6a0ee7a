use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};
use tracing::info;

use crate::config::{AllowedOriginsConfig, Environment};

pub const ALLOWED_HEADERS: [&str; 5] = [
    "Authorization",
    "Content-Type",
    "X-Requested-With",
    "Accept",
    "Origin",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Responds with the literal `*`.
    Any,
    /// Non-empty allow-list; matching origins are echoed back.
    List(Vec<String>),
}

/// The single CORS policy the application installs.
///
/// Fields are private so a wildcard origin can never be paired with
/// credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicyDecision {
    allowed_origins: AllowedOrigins,
    allow_credentials: bool,
}

impl CorsPolicyDecision {
    pub fn any_origin() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            allow_credentials: false,
        }
    }

    /// Credentialed allow-list; an empty list degrades to [`Self::any_origin`].
    pub fn allow_list(origins: Vec<String>) -> Self {
        if origins.is_empty() {
            return Self::any_origin();
        }

        Self {
            allowed_origins: AllowedOrigins::List(origins),
            allow_credentials: true,
        }
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.allowed_origins
    }

    pub fn allowed_headers(&self) -> &'static [&'static str] {
        &ALLOWED_HEADERS
    }

    pub fn allows_any_method(&self) -> bool {
        true
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        match &self.allowed_origins {
            AllowedOrigins::Any => true,
            AllowedOrigins::List(origins) => {
                let origin = origin.trim_end_matches('/');
                origins
                    .iter()
                    .any(|allowed| allowed.trim_end_matches('/').eq_ignore_ascii_case(origin))
            }
        }
    }
}

pub fn resolve_cors_policy(
    environment: Environment,
    configured: Option<&AllowedOriginsConfig>,
) -> CorsPolicyDecision {
    let decision = if environment.is_development() {
        CorsPolicyDecision::any_origin()
    } else {
        CorsPolicyDecision::allow_list(
            configured
                .map(AllowedOriginsConfig::origins)
                .unwrap_or_default(),
        )
    };

    match decision.allowed_origins() {
        AllowedOrigins::Any => info!(
            environment = %environment,
            "CORS allows any origin without credentials"
        ),
        AllowedOrigins::List(origins) => info!(
            environment = %environment,
            origins = ?origins,
            "CORS restricted to configured origins with credentials"
        ),
    }

    decision
}

pub fn cors_middleware(decision: &CorsPolicyDecision) -> Cors {
    let cors = Cors::default()
        .allowed_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-requested-with"),
            header::ACCEPT,
            header::ORIGIN,
        ])
        .allow_any_method()
        // Mismatched simple requests still reach the handler; the browser
        // withholds the response when the allow-origin header is absent.
        .block_on_origin_mismatch(false)
        .max_age(3600);

    match decision.allowed_origins() {
        AllowedOrigins::Any => cors.allow_any_origin().send_wildcard(),
        AllowedOrigins::List(_) => {
            let policy = decision.clone();
            let cors = cors.allowed_origin_fn(move |origin, _| {
                origin
                    .to_str()
                    .map(|value| policy.is_origin_allowed(value))
                    .unwrap_or(false)
            });

            if decision.allow_credentials() {
                cors.supports_credentials()
            } else {
                cors
            }
        }
    }
}
