use super::cards::CardStore;
use super::stacks::StackStore;
use crate::client::model::{Card, Stack};

/// Rollback bookkeeping for one optimistic mutation.
///
/// Every local side effect a mutation applies — a snapshot-restoring edit, a
/// temp-id insert, a card-count delta — registers its undo here before the
/// remote call is issued. On failure `rollback` inverts all of them in one
/// step, so paired cross-store effects can never be undone individually.
///
/// An operation either snapshots the stack list or applies count deltas,
/// never both; creates register a temp-id drop instead of a snapshot so a
/// rollback cannot clobber other entities confirmed while the call was in
/// flight.
#[derive(Debug, Default)]
pub(crate) struct Pending {
    stacks_before: Option<Vec<Stack>>,
    active_before: Option<Option<String>>,
    cards_before: Option<Vec<Card>>,
    drop_stack: Option<String>,
    drop_card: Option<String>,
    count_deltas: Vec<(String, i64)>,
}

impl Pending {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_stacks(&mut self, stacks: &StackStore) {
        self.stacks_before = Some(stacks.stacks().to_vec());
    }

    pub fn save_active(&mut self, stacks: &StackStore) {
        self.active_before = Some(stacks.active_stack_id().map(str::to_string));
    }

    pub fn save_cards(&mut self, cards: &CardStore) {
        self.cards_before = Some(cards.cards().to_vec());
    }

    pub fn drop_stack_on_rollback(&mut self, id: &str) {
        self.drop_stack = Some(id.to_string());
    }

    pub fn drop_card_on_rollback(&mut self, id: &str) {
        self.drop_card = Some(id.to_string());
    }

    /// Records that `delta` has been applied to the stack's card count.
    pub fn count_applied(&mut self, stack_id: &str, delta: i64) {
        self.count_deltas.push((stack_id.to_string(), delta));
    }

    pub fn rollback(self, stacks: &mut StackStore, cards: &mut CardStore) {
        if let Some(id) = self.drop_stack {
            stacks.remove(&id);
        }
        if let Some(id) = self.drop_card {
            cards.remove(&id);
        }
        if let Some(before) = self.cards_before {
            cards.set_cards(before);
        }
        if let Some(before) = self.stacks_before {
            stacks.set_stacks(before);
        }
        if let Some(before) = self.active_before {
            stacks.reset_active(before);
        }
        for (stack_id, delta) in self.count_deltas {
            stacks.adjust_card_count(&stack_id, -delta);
        }
    }
}
