use chrono::{DateTime, Utc};

use crate::client::model::{Stack, StackPatch};

/// In-memory stack collection plus the currently selected stack.
///
/// Only [`Workspace`](super::Workspace) mutation paths touch the crate-private
/// methods; in particular `adjust_card_count` is the single write channel the
/// card operations are allowed to use.
#[derive(Debug, Default)]
pub struct StackStore {
    stacks: Vec<Stack>,
    active_stack_id: Option<String>,
}

impl StackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn set_stacks(&mut self, list: Vec<Stack>) {
        self.stacks = list;
    }

    pub fn stack_by_id(&self, id: &str) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.id == id)
    }

    pub fn active_stack_id(&self) -> Option<&str> {
        self.active_stack_id.as_deref()
    }

    /// Selecting the stack that is already active clears the selection.
    pub fn set_active_stack(&mut self, id: Option<&str>) {
        self.active_stack_id = match id {
            Some(id) if self.active_stack_id.as_deref() == Some(id) => None,
            Some(id) => Some(id.to_string()),
            None => None,
        };
    }

    pub(crate) fn reset_active(&mut self, id: Option<String>) {
        self.active_stack_id = id;
    }

    pub(crate) fn push(&mut self, stack: Stack) {
        self.stacks.push(stack);
    }

    /// Swaps the entry with the given id for `stack`, keeping its position.
    pub(crate) fn replace(&mut self, id: &str, stack: Stack) {
        if let Some(slot) = self.stacks.iter_mut().find(|s| s.id == id) {
            *slot = stack;
        }
    }

    pub(crate) fn remove(&mut self, id: &str) {
        self.stacks.retain(|s| s.id != id);
    }

    pub(crate) fn merge(&mut self, id: &str, patch: &StackPatch, now: DateTime<Utc>) {
        if let Some(stack) = self.stacks.iter_mut().find(|s| s.id == id) {
            if let Some(ref name) = patch.name {
                stack.name = name.clone();
            }
            if let Some(ref cover) = patch.cover {
                stack.cover = cover.clone();
            }
            stack.updated_at = now;
        }
    }

    /// Unclamped counter adjustment. Rollback bookkeeping in the card
    /// mutation paths is responsible for inverting every delta it applied.
    pub(crate) fn adjust_card_count(&mut self, id: &str, delta: i64) {
        if let Some(stack) = self.stacks.iter_mut().find(|s| s.id == id) {
            stack.card_count += delta;
        }
    }
}
