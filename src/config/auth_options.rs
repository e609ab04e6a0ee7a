use serde::Deserialize;
use validator::Validate;

/// Bearer token settings bound from the `auth` section.
///
/// Every field defaults so the section can be absent when authentication is
/// disabled; the values are only checked when the gate decides to enable it.
#[derive(Deserialize, Clone, Validate)]
pub struct AuthOptions {
    #[serde(default)]
    #[validate(length(min = 1, message = "Auth:Issuer is required"))]
    pub issuer: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Auth:Audience is required"))]
    pub audience: String,
    #[serde(default)]
    #[validate(length(
        min = 32,
        message = "Auth:SigningKey must be at least 32 bytes long"
    ))]
    pub signing_key: String,
    #[serde(default = "crate::config::defaults::default_auth_leeway_seconds")]
    pub leeway_seconds: u64,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            issuer: String::new(),
            audience: String::new(),
            signing_key: String::new(),
            leeway_seconds: crate::config::defaults::default_auth_leeway_seconds(),
        }
    }
}

impl std::fmt::Debug for AuthOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthOptions")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("signing_key", &"[REDACTED]")
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}
