//! Clothing collection routes: CRUD, paginated listing, and OPTIONS discovery.

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::middleware::negotiation::{AcceptsJson, BaseUrl};
use crate::middleware::payload::ValidatedBody;
use crate::models::clothing_item::ClothingItemInput;
use crate::models::hal::{CollectionDocument, ItemDocument};
use crate::models::pagination::{create_pagination, PageWindow};
use crate::services::clothing as clothing_service;
use crate::AppState;

pub const COLLECTION_METHODS: &str = "POST, GET, OPTIONS";
pub const ITEM_METHODS: &str = "GET, PUT, DELETE, OPTIONS";

type CorsHeaders = [(HeaderName, &'static str); 3];

fn cors_headers(methods: &'static str) -> CorsHeaders {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (header::ACCESS_CONTROL_ALLOW_METHODS, methods),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    ]
}

fn options_response(methods: &'static str) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ALLOW, methods),
            (header::ACCESS_CONTROL_ALLOW_METHODS, methods),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
        format!("Options you are using: {methods}"),
    )
}

/// OPTIONS /Clothing
pub async fn options_collection() -> impl IntoResponse {
    options_response(COLLECTION_METHODS)
}

/// OPTIONS /Clothing/{id}
pub async fn options_item() -> impl IntoResponse {
    options_response(ITEM_METHODS)
}

/// GET /Clothing — list items with offset/limit pagination and navigation links.
pub async fn list(
    State(state): State<AppState>,
    _accepts: AcceptsJson,
    BaseUrl(base_url): BaseUrl,
    window: PageWindow,
) -> Result<(CorsHeaders, Json<CollectionDocument>), AppError> {
    let total = clothing_service::count(&state.db).await?;
    let pagination = create_pagination(total, window);
    let items = clothing_service::list(&state.db, &window).await?;

    let doc = CollectionDocument::new(items, total, &pagination, &base_url);
    Ok((cors_headers(COLLECTION_METHODS), Json(doc)))
}

/// POST /Clothing — create an item from a JSON or form body.
pub async fn create(
    State(state): State<AppState>,
    _accepts: AcceptsJson,
    BaseUrl(base_url): BaseUrl,
    ValidatedBody(body): ValidatedBody<ClothingItemInput>,
) -> Result<(StatusCode, Json<ItemDocument>), AppError> {
    let item = clothing_service::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(ItemDocument::new(item, &base_url))))
}

/// GET /Clothing/{id} — item detail with self and collection links.
pub async fn get_by_id(
    State(state): State<AppState>,
    _accepts: AcceptsJson,
    BaseUrl(base_url): BaseUrl,
    Path(id): Path<Uuid>,
) -> Result<(CorsHeaders, Json<ItemDocument>), AppError> {
    let item = clothing_service::find_by_id(&state.db, id).await?;
    Ok((cors_headers(ITEM_METHODS), Json(ItemDocument::new(item, &base_url))))
}

/// PUT /Clothing/{id} — replace every field of an item.
pub async fn update(
    State(state): State<AppState>,
    _accepts: AcceptsJson,
    BaseUrl(base_url): BaseUrl,
    Path(id): Path<Uuid>,
    ValidatedBody(body): ValidatedBody<ClothingItemInput>,
) -> Result<Json<ItemDocument>, AppError> {
    let item = clothing_service::update(&state.db, id, &body).await?;
    Ok(Json(ItemDocument::new(item, &base_url)))
}

/// DELETE /Clothing/{id}
pub async fn delete(
    State(state): State<AppState>,
    _accepts: AcceptsJson,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    clothing_service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
