use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{CategoryRequest, CategoryResponse};
use crate::api::routes::AppState;
use crate::error::{AppResult, ProblemDetails};
use crate::middleware::AuthenticatedUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::get().to(list_categories))
            .route("", web::post().to(create_category))
            .route("/{id}", web::get().to(get_category))
            .route("/{id}", web::put().to(update_category))
            .route("/{id}", web::delete().to(delete_category)),
    );
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories ordered by name", body = [CategoryResponse])
    ),
    tag = "categories"
)]
pub(crate) async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let result = state.category_service.list().await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, body = CategoryResponse),
        (status = 404, body = ProblemDetails, content_type = "application/problem+json")
    ),
    tag = "categories"
)]
pub(crate) async fn get_category(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let result = state.category_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, body = CategoryResponse),
        (status = 400, body = ProblemDetails, content_type = "application/problem+json"),
        (status = 401, body = ProblemDetails, content_type = "application/problem+json"),
        (status = 409, body = ProblemDetails, content_type = "application/problem+json")
    ),
    security(("bearer" = [])),
    tag = "categories"
)]
pub(crate) async fn create_category(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .category_service
        .create(payload.into_inner(), user.0.subject())
        .await?;
    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/api/categories/{}", result.id)))
        .json(result))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, body = CategoryResponse),
        (status = 400, body = ProblemDetails, content_type = "application/problem+json"),
        (status = 401, body = ProblemDetails, content_type = "application/problem+json"),
        (status = 404, body = ProblemDetails, content_type = "application/problem+json"),
        (status = 409, body = ProblemDetails, content_type = "application/problem+json")
    ),
    security(("bearer" = [])),
    tag = "categories"
)]
pub(crate) async fn update_category(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .category_service
        .update(path.into_inner(), payload.into_inner(), user.0.subject())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted; its items keep existing without a category"),
        (status = 401, body = ProblemDetails, content_type = "application/problem+json"),
        (status = 404, body = ProblemDetails, content_type = "application/problem+json")
    ),
    security(("bearer" = [])),
    tag = "categories"
)]
pub(crate) async fn delete_category(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .category_service
        .delete(path.into_inner(), user.0.subject())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
