//! Development seeding endpoint.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::middleware::negotiation::{AcceptsJson, BaseUrl};
use crate::models::hal::ItemDocument;
use crate::services::seeder;
use crate::AppState;

/// GET /seeder — insert one randomly generated clothing item.
pub async fn seed(
    State(state): State<AppState>,
    _accepts: AcceptsJson,
    BaseUrl(base_url): BaseUrl,
) -> Result<Json<ItemDocument>, AppError> {
    let item = seeder::seed_one(&state.db).await?;
    Ok(Json(ItemDocument::new(item, &base_url)))
}
