use std::sync::Arc;

use actix_web::web;

use crate::application::{CategoryService, ItemService};

pub mod categories;
pub mod health;
pub mod items;

pub use health::{HealthChecks, HealthEndpoints};

#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub item_service: Arc<ItemService>,
    pub health: HealthChecks,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(categories::configure)
            .configure(items::configure),
    );
}
