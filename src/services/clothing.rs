//! Clothing catalogue service: CRUD and windowed listing.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::clothing_item::{ClothingItem, ClothingItemInput, ClothingItemSummary};
use crate::models::pagination::PageWindow;

const NOT_FOUND: &str = "Item not found";

/// Insert a new clothing item.
pub async fn create(pool: &PgPool, input: &ClothingItemInput) -> Result<ClothingItem, AppError> {
    let item = sqlx::query_as::<_, ClothingItem>(
        r#"
        INSERT INTO clothing_items (id, name, kind, brand, color, size, material, price, description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(&input.name)
    .bind(&input.kind)
    .bind(&input.brand)
    .bind(&input.color)
    .bind(&input.size)
    .bind(&input.material)
    .bind(&input.price)
    .bind(&input.description)
    .fetch_one(pool)
    .await?;

    tracing::info!(item_id = %item.id, name = %item.name, "Created clothing item");
    Ok(item)
}

/// Find a clothing item by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<ClothingItem, AppError> {
    sqlx::query_as::<_, ClothingItem>("SELECT * FROM clothing_items WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
}

/// Count every stored item.
pub async fn count(pool: &PgPool) -> Result<i64, AppError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clothing_items")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

/// List item summaries for a window, or all of them when paging is disabled.
pub async fn list(
    pool: &PgPool,
    window: &PageWindow,
) -> Result<Vec<ClothingItemSummary>, AppError> {
    const COLUMNS: &str = "SELECT id, name, kind, brand FROM clothing_items \
                           ORDER BY created_at ASC, id ASC";

    let items = match window.fetch_bounds() {
        Some((offset, limit)) => {
            let sql = format!("{COLUMNS} LIMIT $1 OFFSET $2");
            sqlx::query_as::<_, ClothingItemSummary>(&sql)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await?
        }
        None => {
            sqlx::query_as::<_, ClothingItemSummary>(COLUMNS)
                .fetch_all(pool)
                .await?
        }
    };

    tracing::debug!(
        count = items.len(),
        start = ?window.start,
        limit = ?window.limit,
        "Listed clothing items"
    );
    Ok(items)
}

/// Replace every field of an existing item.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &ClothingItemInput,
) -> Result<ClothingItem, AppError> {
    let item = sqlx::query_as::<_, ClothingItem>(
        r#"
        UPDATE clothing_items SET
            name = $2,
            kind = $3,
            brand = $4,
            color = $5,
            size = $6,
            material = $7,
            price = $8,
            description = $9,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.kind)
    .bind(&input.brand)
    .bind(&input.color)
    .bind(&input.size)
    .bind(&input.material)
    .bind(&input.price)
    .bind(&input.description)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    tracing::info!(item_id = %id, "Updated clothing item");
    Ok(item)
}

/// Delete an item by ID.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM clothing_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    tracing::info!(item_id = %id, "Deleted clothing item");
    Ok(())
}
