use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};

use crate::error::{AppError, AppResult};
use crate::security::AuthenticationState;
use crate::utils::jwt::validate_token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// Authentication is disabled for this process.
    Anonymous,
    User { subject: String },
}

impl Principal {
    /// Identifier recorded as the actor of write operations.
    pub fn subject(&self) -> &str {
        match self {
            Principal::Anonymous => "anonymous",
            Principal::User { subject } => subject,
        }
    }
}

/// Extractor for endpoints that need an authenticated caller. With
/// authentication disabled every request resolves to [`Principal::Anonymous`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Principal);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<AppResult<Self>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> AppResult<AuthenticatedUser> {
    let state = req
        .app_data::<web::Data<AuthenticationState>>()
        .ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!("missing AuthenticationState app data"))
        })?;

    let options = match state.get_ref() {
        AuthenticationState::Disabled => return Ok(AuthenticatedUser(Principal::Anonymous)),
        AuthenticationState::Bearer(options) => options,
    };

    let token = bearer_token(req).ok_or(AppError::Unauthorized)?;
    let claims = validate_token(token, options)?;

    Ok(AuthenticatedUser(Principal::User {
        subject: claims.sub,
    }))
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
