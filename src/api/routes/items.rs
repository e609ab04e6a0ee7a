use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{ItemQueryParams, ItemRequest, ItemResponse};
use crate::api::routes::AppState;
use crate::error::{AppResult, ProblemDetails};
use crate::middleware::AuthenticatedUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/items")
            .route("", web::get().to(list_items))
            .route("", web::post().to(create_item))
            .route("/{id}", web::get().to(get_item))
            .route("/{id}", web::put().to(update_item))
            .route("/{id}", web::delete().to(delete_item)),
    );
}

#[utoipa::path(
    get,
    path = "/api/items",
    params(ItemQueryParams),
    responses(
        (status = 200, description = "Items, newest first", body = [ItemResponse])
    ),
    tag = "items"
)]
pub(crate) async fn list_items(
    state: web::Data<AppState>,
    query: web::Query<ItemQueryParams>,
) -> AppResult<HttpResponse> {
    let result = state.item_service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, body = ItemResponse),
        (status = 404, body = ProblemDetails, content_type = "application/problem+json")
    ),
    tag = "items"
)]
pub(crate) async fn get_item(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let result = state.item_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    post,
    path = "/api/items",
    request_body = ItemRequest,
    responses(
        (status = 201, body = ItemResponse),
        (status = 400, body = ProblemDetails, content_type = "application/problem+json"),
        (status = 401, body = ProblemDetails, content_type = "application/problem+json")
    ),
    security(("bearer" = [])),
    tag = "items"
)]
pub(crate) async fn create_item(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<ItemRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .item_service
        .create(payload.into_inner(), user.0.subject())
        .await?;
    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/api/items/{}", result.id)))
        .json(result))
}

#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    request_body = ItemRequest,
    responses(
        (status = 200, body = ItemResponse),
        (status = 400, body = ProblemDetails, content_type = "application/problem+json"),
        (status = 401, body = ProblemDetails, content_type = "application/problem+json"),
        (status = 404, body = ProblemDetails, content_type = "application/problem+json")
    ),
    security(("bearer" = [])),
    tag = "items"
)]
pub(crate) async fn update_item(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<ItemRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .item_service
        .update(path.into_inner(), payload.into_inner(), user.0.subject())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, body = ProblemDetails, content_type = "application/problem+json"),
        (status = 404, body = ProblemDetails, content_type = "application/problem+json")
    ),
    security(("bearer" = [])),
    tag = "items"
)]
pub(crate) async fn delete_item(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .item_service
        .delete(path.into_inner(), user.0.subject())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
