use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Client-side view of a stack. The id is a string so a locally generated
/// temporary id can hold the slot until the server-assigned one replaces it.
/// `card_count` is maintained incrementally by the card mutation paths, not
/// recomputed by scanning the card collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    pub id: String,
    pub name: String,
    pub cover: String,
    pub card_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub stack_id: String,
    pub name: String,
    pub description: Option<String>,
    pub cover: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a stack; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct StackPatch {
    pub name: Option<String>,
    pub cover: Option<String>,
}

/// Partial update for a card. Re-parenting is not expressed here; moving a
/// card between stacks goes through the dedicated move operation so the
/// count bookkeeping stays in one place.
#[derive(Debug, Clone, Default)]
pub struct CardPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CardDraft {
    pub stack_id: String,
    pub name: String,
    pub cover: String,
    pub description: Option<String>,
}

pub(crate) fn temp_id() -> String {
    format!("tmp-{}", Uuid::new_v4())
}

pub fn is_temp_id(id: &str) -> bool {
    id.starts_with("tmp-")
}
