//! Seed script for development — fills the catalogue with random clothing items.
//!
//! Usage: `cargo run --bin seed -- [count]` (defaults to 10 items)
//!
//! Requires the `DATABASE_URL` environment variable (reads .env).

use anyhow::Context;
use clothing_api::{db, services::seeder};

const DEFAULT_COUNT: usize = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("Invalid item count '{arg}'"))?,
        None => DEFAULT_COUNT,
    };

    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = db::create_pool(&db_url, 5).await?;

    // Run migrations first
    db::migrate(&pool).await?;

    println!("=== Clothing Seed Script ===");

    let existing = clothing_api::services::clothing::count(&pool).await?;
    let created = seeder::seed_many(&pool, count).await?;

    println!("[done] Created {created} items ({} total)", existing + created as i64);

    Ok(())
}
