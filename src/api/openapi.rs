use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_PATH: &str = "/openapi/v1.json";
pub const SWAGGER_UI_PATH: &str = "/swagger";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::routes::categories::list_categories,
        crate::api::routes::categories::get_category,
        crate::api::routes::categories::create_category,
        crate::api::routes::categories::update_category,
        crate::api::routes::categories::delete_category,
        crate::api::routes::items::list_items,
        crate::api::routes::items::get_item,
        crate::api::routes::items::create_item,
        crate::api::routes::items::update_item,
        crate::api::routes::items::delete_item,
    ),
    components(
        schemas(
            crate::api::dtos::CategoryRequest,
            crate::api::dtos::CategoryResponse,
            crate::api::dtos::ItemRequest,
            crate::api::dtos::ItemResponse,
            crate::error::ProblemDetails,
            crate::error::ValidationIssue,
        )
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "categories", description = "Category management"),
        (name = "items", description = "Item management"),
    ),
    info(
        title = "Template API",
        version = "v1",
        description = "Items and categories starter API",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new(format!("{SWAGGER_UI_PATH}/{{_:.*}}"))
            .url(OPENAPI_PATH, ApiDoc::openapi()),
    );
}
