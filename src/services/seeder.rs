//! Random catalogue data for development databases.

use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::clothing_item::{ClothingItem, ClothingItemInput, SIZES};
use crate::services::clothing;

const ITEM_TYPE: &str = "Clothing";

const ADJECTIVES: &[&str] = &[
    "Rustic", "Sleek", "Handcrafted", "Ergonomic", "Refined", "Vintage", "Tailored", "Relaxed",
    "Classic", "Lightweight",
];
const GARMENTS: &[&str] = &[
    "Shirt", "Jacket", "Trousers", "Hoodie", "Scarf", "Sweater", "Coat", "Dress", "Shorts",
    "Cardigan",
];
const BRAND_PREFIXES: &[&str] = &[
    "North", "Blue", "Iron", "Silver", "Wild", "Urban", "Harbor", "Maple",
];
const BRAND_SUFFIXES: &[&str] = &["wind", "stone", "field", "works", "line", "& Co", "Group"];
const COLORS: &[&str] = &[
    "black", "white", "navy", "olive", "maroon", "teal", "beige", "grey", "mustard", "indigo",
];
const MATERIALS: &[&str] = &[
    "Cotton", "Linen", "Wool", "Silk", "Denim", "Polyester", "Cashmere", "Leather",
];
const SENTENCES: &[&str] = &[
    "Cut for an easy fit that works from morning to evening.",
    "Finished with reinforced seams for everyday wear.",
    "Machine washable and quick to dry.",
    "A versatile layer for changing weather.",
    "Designed to pair with the rest of the collection.",
    "Soft to the touch and breathable.",
    "Made in small batches with traceable fabric.",
];

/// Build one random, fully populated clothing item.
pub fn random_item<R: Rng>(rng: &mut R) -> ClothingItemInput {
    let sentence_count = rng.gen_range(2..=3);
    let description = SENTENCES
        .choose_multiple(rng, sentence_count)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    ClothingItemInput {
        name: format!("{} {} {}", pick(rng, ADJECTIVES), pick(rng, MATERIALS), pick(rng, GARMENTS)),
        kind: ITEM_TYPE.to_string(),
        brand: format!("{}{}", pick(rng, BRAND_PREFIXES), pick(rng, BRAND_SUFFIXES)),
        color: pick(rng, COLORS).to_string(),
        size: pick(rng, &SIZES).to_string(),
        material: pick(rng, MATERIALS).to_string(),
        price: format!("{}.00", rng.gen_range(5..=500)),
        description,
    }
}

fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

/// Insert one random item.
pub async fn seed_one(pool: &PgPool) -> Result<ClothingItem, AppError> {
    let input = random_item(&mut rand::thread_rng());
    clothing::create(pool, &input).await
}

/// Insert `count` random items, returning how many were created.
pub async fn seed_many(pool: &PgPool, count: usize) -> Result<usize, AppError> {
    for _ in 0..count {
        seed_one(pool).await?;
    }
    tracing::info!(count, "Seeded clothing items");
    Ok(count)
}
