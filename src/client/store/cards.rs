use chrono::{DateTime, Utc};

use crate::client::model::{Card, CardPatch};

/// In-memory card collection, newest first.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn set_cards(&mut self, list: Vec<Card>) {
        self.cards = list;
    }

    pub fn card_by_id(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Local-only prune after a stack deletion; the server cascade removes
    /// the rows, this keeps the cache free of orphans before the next reload.
    pub fn remove_cards_by_stack_id(&mut self, stack_id: &str) {
        self.cards.retain(|c| c.stack_id != stack_id);
    }

    pub(crate) fn insert_front(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Swaps the entry with the given id for `card`, keeping its position.
    pub(crate) fn replace(&mut self, id: &str, card: Card) {
        if let Some(slot) = self.cards.iter_mut().find(|c| c.id == id) {
            *slot = card;
        }
    }

    pub(crate) fn remove(&mut self, id: &str) {
        self.cards.retain(|c| c.id != id);
    }

    pub(crate) fn merge(&mut self, id: &str, patch: &CardPatch, now: DateTime<Utc>) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
            if let Some(ref name) = patch.name {
                card.name = name.clone();
            }
            if let Some(ref description) = patch.description {
                card.description = Some(description.clone());
            }
            if let Some(ref cover) = patch.cover {
                card.cover = cover.clone();
            }
            card.updated_at = now;
        }
    }

    pub(crate) fn reparent(&mut self, id: &str, stack_id: &str, now: DateTime<Utc>) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
            card.stack_id = stack_id.to_string();
            card.updated_at = now;
        }
    }
}
