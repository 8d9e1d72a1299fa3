use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Cover, StackWithCount};

const SELECT_WITH_COUNT: &str = r#"
    SELECT s.id, s.name, s.cover_type, s.cover_value,
           (SELECT COUNT(*) FROM cards c WHERE c.stack_id = s.id) AS card_count,
           s.created_at, s.updated_at
    FROM stacks s
"#;

#[derive(Clone)]
pub struct StackRepository {
    pool: Arc<SqlitePool>,
}

impl StackRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, cover: &Cover) -> Result<StackWithCount> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO stacks (id, name, cover_type, cover_value, created_at, updated_at)
            VALUES ($1, $2, $3, $4, datetime('now'), datetime('now'))
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(cover.kind.to_string())
        .bind(&cover.value)
        .execute(self.pool.as_ref())
        .await?;

        self.get_by_id(id).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<StackWithCount>> {
        let query = format!("{} WHERE s.id = $1", SELECT_WITH_COUNT);
        let stack = sqlx::query_as::<_, StackWithCount>(&query)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(stack)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<StackWithCount> {
        self.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn list_all(&self) -> Result<Vec<StackWithCount>> {
        let query = format!("{} ORDER BY s.created_at ASC, s.id ASC", SELECT_WITH_COUNT);
        let stacks = sqlx::query_as::<_, StackWithCount>(&query)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(stacks)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        cover: Option<&Cover>,
    ) -> Result<StackWithCount> {
        let result = sqlx::query(
            r#"
            UPDATE stacks
            SET name = COALESCE($2, name),
                cover_type = COALESCE($3, cover_type),
                cover_value = COALESCE($4, cover_value),
                updated_at = datetime('now')
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(cover.map(|c| c.kind.to_string()))
        .bind(cover.map(|c| c.value.as_str()))
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM stacks WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool> {
        let found = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stacks WHERE id = $1")
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(found > 0)
    }
}
