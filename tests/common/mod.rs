#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use template_api::api::routes::health::{CheckOutcome, HealthCheck, SelfCheck};
use template_api::api::routes::{AppState, HealthChecks, HealthEndpoints};
use template_api::application::{CategoryService, ItemService};
use template_api::bootstrap::StartupSettings;
use template_api::config::{AuthOptions, Environment};
use template_api::infrastructure::db::{connect_options, DatabaseConnection};
use template_api::security::{AuthenticationState, CorsPolicyDecision};
use template_api::utils::jwt::issue_token;

pub mod mocks;

use mocks::{MockCategoryRepo, MockItemRepo};

pub const SIGNING_KEY: &str = "0123456789abcdef0123456789abcdef";

pub fn auth_options() -> AuthOptions {
    AuthOptions {
        issuer: "https://issuer.example.com".to_string(),
        audience: "template-api".to_string(),
        signing_key: SIGNING_KEY.to_string(),
        leeway_seconds: 0,
    }
}

pub fn bearer_token(subject: &str) -> String {
    let token = issue_token(subject, &auth_options(), Duration::minutes(5))
        .expect("test token should be issued");
    format!("Bearer {token}")
}

/// Stands in for the database probe so readiness can be driven either way.
pub struct StubDatabaseCheck {
    pub healthy: bool,
}

#[async_trait]
impl HealthCheck for StubDatabaseCheck {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn check(&self) -> CheckOutcome {
        if self.healthy {
            CheckOutcome::healthy()
        } else {
            CheckOutcome::unhealthy("connection refused")
        }
    }
}

pub struct TestContext {
    pub categories: Arc<MockCategoryRepo>,
    pub items: Arc<MockItemRepo>,
    pub state: AppState,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_database_health(true)
    }

    pub fn with_database_health(healthy: bool) -> Self {
        let items = Arc::new(MockItemRepo::default());
        let categories = Arc::new(MockCategoryRepo::linked_to(&items));

        let state = AppState {
            category_service: Arc::new(CategoryService::new(categories.clone())),
            item_service: Arc::new(ItemService::new(items.clone(), categories.clone())),
            health: HealthChecks::new()
                .with_check(Arc::new(SelfCheck))
                .with_check(Arc::new(StubDatabaseCheck { healthy })),
        };

        Self {
            categories,
            items,
            state,
        }
    }
}

/// Settings as the bootstrap would resolve them for `environment` with the
/// default authentication decision.
pub fn settings_for(environment: Environment) -> Arc<StartupSettings> {
    let (authentication, health, exception_handler_enabled) = match environment {
        Environment::Production => (
            AuthenticationState::Disabled,
            HealthEndpoints::Probes,
            true,
        ),
        Environment::Development => (
            AuthenticationState::Bearer(Arc::new(auth_options())),
            HealthEndpoints::PlatformDefault,
            false,
        ),
    };

    let database = DatabaseConnection::KeyValue("Host=localhost;Database=test".to_string());
    let connect_options = connect_options(&database).expect("test connection string parses");

    Arc::new(StartupSettings {
        environment,
        database,
        connect_options,
        authentication,
        cors: CorsPolicyDecision::any_origin(),
        health,
        api_docs_enabled: true,
        exception_handler_enabled,
    })
}

pub fn with_cors(
    settings: Arc<StartupSettings>,
    cors: CorsPolicyDecision,
) -> Arc<StartupSettings> {
    let mut settings = (*settings).clone();
    settings.cors = cors;
    Arc::new(settings)
}

pub fn without_docs(settings: Arc<StartupSettings>) -> Arc<StartupSettings> {
    let mut settings = (*settings).clone();
    settings.api_docs_enabled = false;
    Arc::new(settings)
}
