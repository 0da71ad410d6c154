//! Route definitions for the clothing API.

pub mod clothing;
pub mod health;
pub mod seeder;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// GET / — plain-text greeting.
pub async fn root() -> &'static str {
    "Hello world!"
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let clothing_routes = Router::new()
        .route(
            "/Clothing",
            get(clothing::list)
                .post(clothing::create)
                .options(clothing::options_collection),
        )
        .route(
            "/Clothing/{id}",
            get(clothing::get_by_id)
                .put(clothing::update)
                .delete(clothing::delete)
                .options(clothing::options_item),
        );

    Router::new()
        .route("/", get(root))
        .route("/seeder", get(seeder::seed))
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .merge(clothing_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
