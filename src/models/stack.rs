use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
#[serde(rename_all = "lowercase")]
pub enum CoverKind {
    #[sqlx(rename = "color")]
    Color,
    #[sqlx(rename = "gradient")]
    Gradient,
    #[sqlx(rename = "image")]
    Image,
}

impl std::fmt::Display for CoverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoverKind::Color => write!(f, "color"),
            CoverKind::Gradient => write!(f, "gradient"),
            CoverKind::Image => write!(f, "image"),
        }
    }
}

impl std::str::FromStr for CoverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "color" => Ok(CoverKind::Color),
            "gradient" => Ok(CoverKind::Gradient),
            "image" => Ok(CoverKind::Image),
            _ => Err(format!("Invalid cover type: {}", s)),
        }
    }
}

/// Visual cover of a stack as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cover {
    #[serde(rename = "type")]
    pub kind: CoverKind,
    pub value: String,
}

/// Stack row joined with its card count.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StackWithCount {
    pub id: Uuid,
    pub name: String,
    pub cover_type: String,
    pub cover_value: String,
    pub card_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStack {
    pub name: String,
    pub cover: Cover,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStack {
    pub name: Option<String>,
    pub cover: Option<Cover>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackResponse {
    pub id: Uuid,
    pub name: String,
    pub cover: Cover,
    pub card_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StackWithCount> for StackResponse {
    fn from(row: StackWithCount) -> Self {
        let kind = row.cover_type.parse().unwrap_or(CoverKind::Color);
        Self {
            id: row.id,
            name: row.name,
            cover: Cover {
                kind,
                value: row.cover_value,
            },
            card_count: row.card_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
