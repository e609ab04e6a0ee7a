pub mod auth_gate;
pub mod cors;

pub use auth_gate::{resolve_authentication, AuthenticationState};
pub use cors::{cors_middleware, resolve_cors_policy, AllowedOrigins, CorsPolicyDecision};
