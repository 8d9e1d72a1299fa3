use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::Card;

#[derive(Clone)]
pub struct CardRepository {
    pool: Arc<SqlitePool>,
}

impl CardRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        stack_id: Uuid,
        name: &str,
        description: Option<&str>,
        cover: &str,
    ) -> Result<Card> {
        let id = Uuid::new_v4();

        let card = sqlx::query_as::<_, Card>(
            r#"
            INSERT INTO cards (id, stack_id, name, description, cover, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, datetime('now'), datetime('now'))
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(stack_id)
        .bind(name)
        .bind(description)
        .bind(cover)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(card)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Card>> {
        let card = sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(card)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Card> {
        self.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn list_all(&self) -> Result<Vec<Card>> {
        let cards =
            sqlx::query_as::<_, Card>("SELECT * FROM cards ORDER BY created_at DESC, id ASC")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(cards)
    }

    pub async fn list_by_stack(&self, stack_id: Uuid) -> Result<Vec<Card>> {
        let cards = sqlx::query_as::<_, Card>(
            "SELECT * FROM cards WHERE stack_id = $1 ORDER BY created_at DESC, id ASC",
        )
        .bind(stack_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(cards)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
        cover: Option<&str>,
        stack_id: Option<Uuid>,
    ) -> Result<Card> {
        let card = sqlx::query_as::<_, Card>(
            r#"
            UPDATE cards
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                cover = COALESCE($4, cover),
                stack_id = COALESCE($5, stack_id),
                updated_at = datetime('now')
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(cover)
        .bind(stack_id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or(AppError::NotFound)?;

        Ok(card)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    pub async fn move_card(&self, id: Uuid, target_stack_id: Uuid) -> Result<Card> {
        let card = sqlx::query_as::<_, Card>(
            r#"
            UPDATE cards
            SET stack_id = $2, updated_at = datetime('now')
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(target_stack_id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or(AppError::NotFound)?;

        Ok(card)
    }
}
