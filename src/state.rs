use sqlx::SqlitePool;
use std::sync::Arc;

use crate::repo::{card::CardRepository, stack::StackRepository};

#[derive(Clone)]
pub struct AppState {
    pub stacks: StackRepository,
    pub cards: CardRepository,
    pub pool: Arc<SqlitePool>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let pool = Arc::new(pool);
        Self {
            stacks: StackRepository::new(pool.clone()),
            cards: CardRepository::new(pool.clone()),
            pool,
        }
    }
}
