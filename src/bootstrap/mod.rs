//! Startup sequence: resolve settings, register persistence, migrate, serve.

mod settings;

use std::sync::Arc;
use std::time::Instant;

use actix_web::{
    body::MessageBody,
    dev::{Service as _, ServiceFactory, ServiceRequest, ServiceResponse},
    http::header::HeaderName,
    middleware::Condition,
    web, App, HttpServer,
};
use sqlx::PgPool;
use tracing::info;

pub use settings::StartupSettings;

use crate::api::openapi::configure_swagger_ui;
use crate::api::routes::{
    self,
    health::{DatabaseCheck, SelfCheck},
    AppState, HealthChecks,
};
use crate::application::{CategoryService, ItemService};
use crate::config::AppConfig;
use crate::error::{AppError, StartupError};
use crate::infrastructure::db::{create_pool, EmbeddedMigrations, SchemaMigrator};
use crate::infrastructure::repositories::{CategoryRepositoryImpl, ItemRepositoryImpl};
use crate::middleware::request_logging::{
    client_ip, request_id_for, request_id_header_value, status_class, REQUEST_ID_HEADER,
};
use crate::middleware::{exception_handler, status_code_pages};
use crate::security::cors_middleware;

/// Everything needed to start serving; produced only after migrations
/// succeeded.
pub struct PreparedApplication {
    pub settings: Arc<StartupSettings>,
    pub state: AppState,
    pub host: String,
    pub port: u16,
}

pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    let prepared = prepare(&config, &EmbeddedMigrations).await?;
    serve(prepared).await
}

pub async fn prepare(
    config: &AppConfig,
    migrator: &dyn SchemaMigrator,
) -> Result<PreparedApplication, StartupError> {
    let settings = StartupSettings::resolve(config)?;

    let pool = create_pool(settings.connect_options.clone(), &config.database);
    let state = build_state(pool.clone());

    migrator.migrate(&pool).await?;
    info!("database migrations applied");

    Ok(PreparedApplication {
        settings: Arc::new(settings),
        state,
        host: config.host.clone(),
        port: config.port,
    })
}

pub async fn serve(prepared: PreparedApplication) -> Result<(), StartupError> {
    let PreparedApplication {
        settings,
        state,
        host,
        port,
    } = prepared;

    info!(
        host = %host,
        port = port,
        environment = %settings.environment,
        health_readiness = settings.health.readiness_path(),
        health_liveness = settings.health.liveness_path(),
        api_docs_enabled = settings.api_docs_enabled,
        "starting HTTP server"
    );

    HttpServer::new(move || build_app(state.clone(), settings.clone()))
        .bind((host.as_str(), port))?
        .run()
        .await?;

    Ok(())
}

pub fn build_state(pool: PgPool) -> AppState {
    let category_repo = Arc::new(CategoryRepositoryImpl::new(pool.clone()));
    let item_repo = Arc::new(ItemRepositoryImpl::new(pool.clone()));

    AppState {
        category_service: Arc::new(CategoryService::new(category_repo.clone())),
        item_service: Arc::new(ItemService::new(item_repo, category_repo)),
        health: HealthChecks::new()
            .with_check(Arc::new(SelfCheck))
            .with_check(Arc::new(DatabaseCheck::new(pool))),
    }
}

/// One worker's application. CORS stays the outermost layer; preflights and
/// error responses both pass through it.
pub fn build_app(
    state: AppState,
    settings: Arc<StartupSettings>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = settings.health;
    let api_docs_enabled = settings.api_docs_enabled;

    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(settings.authentication.clone()))
        .app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .configure(routes::configure)
        .configure(|cfg| health.configure(cfg))
        .configure(|cfg| {
            if api_docs_enabled {
                configure_swagger_ui(cfg);
            }
        })
        .wrap(status_code_pages())
        .wrap(Condition::new(
            settings.exception_handler_enabled,
            exception_handler(),
        ))
        .wrap_fn(|req, srv| {
            let request_id = request_id_for(&req);
            let method = req.method().to_string();
            let path = req.path().to_string();
            let client_ip = client_ip(&req);
            let started = Instant::now();

            let fut = srv.call(req);
            async move {
                let mut response = fut.await?;
                response.headers_mut().insert(
                    HeaderName::from_static(REQUEST_ID_HEADER),
                    request_id_header_value(&request_id),
                );

                let status = response.status().as_u16();
                info!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = status,
                    status_class = status_class(status),
                    client_ip = %client_ip,
                    latency_ms = started.elapsed().as_millis() as u64,
                    "request completed"
                );
                Ok(response)
            }
        })
        .wrap(cors_middleware(&settings.cors))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| AppError::NotFound("resource not found".to_string()).into())
}
