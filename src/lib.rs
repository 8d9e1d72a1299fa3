pub mod client;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod state;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use state::AppState;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Stack routes
        .route("/stacks", post(handlers::stacks::create_stack))
        .route("/stacks", get(handlers::stacks::list_stacks))
        .route("/stacks/{stack_id}", get(handlers::stacks::get_stack))
        .route("/stacks/{stack_id}", put(handlers::stacks::update_stack))
        .route("/stacks/{stack_id}", delete(handlers::stacks::delete_stack))
        // Card routes
        .route(
            "/stacks/{stack_id}/cards",
            get(handlers::cards::list_stack_cards),
        )
        .route(
            "/stacks/{stack_id}/cards",
            post(handlers::cards::create_card),
        )
        .route("/cards", get(handlers::cards::list_cards))
        .route("/cards/{card_id}", get(handlers::cards::get_card))
        .route("/cards/{card_id}", put(handlers::cards::update_card))
        .route("/cards/{card_id}", delete(handlers::cards::delete_card))
        .route("/cards/{card_id}/move", patch(handlers::cards::move_card));

    Router::new()
        .nest("/api", api_routes)
        .route("/", get(handlers::health::index))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub mod test_utils {
    use crate::state::AppState;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use sqlx::SqlitePool;
    use std::str::FromStr;

    pub async fn create_test_pool() -> SqlitePool {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("Failed to parse connect options")
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await
            .expect("Failed to create test pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    pub async fn create_test_state() -> AppState {
        let pool = create_test_pool().await;
        AppState::new(pool)
    }
}
