use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use actix_web::{web, HttpResponse};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::warn;

use crate::api::routes::AppState;
use crate::middleware::PreserveBody;

/// Checks carrying this tag are the only ones run by the liveness endpoint.
pub const LIVE_TAG: &str = "live";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub status: HealthStatus,
    pub description: Option<String>,
}

impl CheckOutcome {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            description: None,
        }
    }

    pub fn unhealthy(description: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            description: Some(description.into()),
        }
    }
}

#[async_trait]
pub trait HealthCheck: Send + Sync {
    fn name(&self) -> &'static str;

    fn tags(&self) -> &'static [&'static str] {
        &[]
    }

    async fn check(&self) -> CheckOutcome;
}

/// Always healthy; proves the process is serving requests.
pub struct SelfCheck;

#[async_trait]
impl HealthCheck for SelfCheck {
    fn name(&self) -> &'static str {
        "self"
    }

    fn tags(&self) -> &'static [&'static str] {
        &[LIVE_TAG]
    }

    async fn check(&self) -> CheckOutcome {
        CheckOutcome::healthy()
    }
}

pub struct DatabaseCheck {
    pool: PgPool,
}

impl DatabaseCheck {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for DatabaseCheck {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn check(&self) -> CheckOutcome {
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => CheckOutcome::healthy(),
            Err(err) => {
                warn!(error = %err, "database health check failed");
                CheckOutcome::unhealthy("database is unreachable")
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct HealthChecks {
    checks: Vec<Arc<dyn HealthCheck>>,
}

impl HealthChecks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.checks.push(check);
        self
    }

    /// Runs every registered check, or only those tagged `tag`.
    pub async fn run(&self, tag: Option<&str>) -> HealthReport {
        let started = Instant::now();
        let mut entries = BTreeMap::new();

        for check in self
            .checks
            .iter()
            .filter(|check| tag.map_or(true, |tag| check.tags().iter().any(|t| *t == tag)))
        {
            let outcome = check.check().await;
            entries.insert(
                check.name().to_string(),
                HealthEntry {
                    status: outcome.status,
                    description: outcome.description,
                },
            );
        }

        let status = if entries
            .values()
            .all(|entry| entry.status == HealthStatus::Healthy)
        {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };

        HealthReport {
            status,
            total_duration_ms: started.elapsed().as_millis() as u64,
            entries,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthEntry {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub total_duration_ms: u64,
    pub entries: BTreeMap<String, HealthEntry>,
}

/// Which pair of health routes is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthEndpoints {
    /// `/health/ready` and `/health/alive`.
    Probes,
    /// `/health` and `/alive`.
    PlatformDefault,
}

impl HealthEndpoints {
    pub fn readiness_path(self) -> &'static str {
        match self {
            HealthEndpoints::Probes => "/health/ready",
            HealthEndpoints::PlatformDefault => "/health",
        }
    }

    pub fn liveness_path(self) -> &'static str {
        match self {
            HealthEndpoints::Probes => "/health/alive",
            HealthEndpoints::PlatformDefault => "/alive",
        }
    }

    pub fn configure(self, cfg: &mut web::ServiceConfig) {
        cfg.route(self.readiness_path(), web::get().to(readiness))
            .route(self.liveness_path(), web::get().to(liveness));
    }
}

async fn readiness(state: web::Data<AppState>) -> HttpResponse {
    report_response(state.health.run(None).await)
}

async fn liveness(state: web::Data<AppState>) -> HttpResponse {
    report_response(state.health.run(Some(LIVE_TAG)).await)
}

fn report_response(report: HealthReport) -> HttpResponse {
    match report.status {
        HealthStatus::Healthy => HttpResponse::Ok().json(report),
        HealthStatus::Unhealthy => {
            let mut response = HttpResponse::ServiceUnavailable().json(report);
            response.extensions_mut().insert(PreserveBody);
            response
        }
    }
}
