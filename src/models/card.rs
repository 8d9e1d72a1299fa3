use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Card {
    pub id: Uuid,
    pub stack_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub cover: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCard {
    pub name: String,
    pub description: Option<String>,
    pub cover: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCard {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover: Option<String>,
    pub stack_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCard {
    pub stack_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub id: Uuid,
    pub stack_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub cover: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            stack_id: card.stack_id,
            name: card.name,
            description: card.description,
            cover: card.cover,
            created_at: card.created_at,
            updated_at: card.updated_at,
        }
    }
}
