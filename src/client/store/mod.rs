pub mod cards;
pub mod stacks;
mod txn;

pub use cards::CardStore;
pub use stacks::StackStore;

use chrono::Utc;

use super::error::ClientResult;
use super::model::{temp_id, Card, CardDraft, CardPatch, Stack, StackPatch};
use super::remote::RemoteApi;
use txn::Pending;

/// Owns both client-side collections and exposes the compound mutating
/// operations, so a card-list edit and its stack-count adjustment are always
/// applied, confirmed, and rolled back together.
///
/// Every mutation is optimistic-then-confirm: the local state changes before
/// the remote call goes out, and a remote failure restores the exact pre-call
/// state and propagates the error to the caller. No retries happen here.
pub struct Workspace<A> {
    api: A,
    pub stacks: StackStore,
    pub cards: CardStore,
}

impl<A: RemoteApi> Workspace<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            stacks: StackStore::new(),
            cards: CardStore::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Cards belonging to the currently selected stack, recomputed on read.
    pub fn active_cards(&self) -> Vec<&Card> {
        match self.stacks.active_stack_id() {
            Some(active) => self
                .cards
                .cards()
                .iter()
                .filter(|c| c.stack_id == active)
                .collect(),
            None => Vec::new(),
        }
    }

    pub async fn create_stack(&mut self, name: &str, cover: &str) -> ClientResult<Stack> {
        let now = Utc::now();
        let tmp = temp_id();
        let mut txn = Pending::new();
        txn.drop_stack_on_rollback(&tmp);

        self.stacks.push(Stack {
            id: tmp.clone(),
            name: name.to_string(),
            cover: cover.to_string(),
            card_count: 0,
            created_at: now,
            updated_at: now,
        });

        match self.api.create_stack(name, cover).await {
            Ok(created) => {
                self.stacks.replace(&tmp, created.clone());
                Ok(created)
            }
            Err(err) => {
                txn.rollback(&mut self.stacks, &mut self.cards);
                Err(err)
            }
        }
    }

    pub async fn update_stack(&mut self, id: &str, patch: StackPatch) -> ClientResult<()> {
        let mut txn = Pending::new();
        txn.save_stacks(&self.stacks);

        self.stacks.merge(id, &patch, Utc::now());

        match self.api.update_stack(id, &patch).await {
            Ok(_) => Ok(()),
            Err(err) => {
                txn.rollback(&mut self.stacks, &mut self.cards);
                Err(err)
            }
        }
    }

    pub async fn delete_stack(&mut self, id: &str) -> ClientResult<()> {
        let mut txn = Pending::new();
        txn.save_stacks(&self.stacks);
        txn.save_active(&self.stacks);

        self.stacks.remove(id);
        if self.stacks.active_stack_id() == Some(id) {
            let fallback = self.stacks.stacks().first().map(|s| s.id.clone());
            self.stacks.reset_active(fallback);
        }

        match self.api.delete_stack(id).await {
            Ok(()) => {
                // The server cascade removed the rows; prune the cache too so
                // no orphan survives until the next reload.
                self.cards.remove_cards_by_stack_id(id);
                Ok(())
            }
            Err(err) => {
                txn.rollback(&mut self.stacks, &mut self.cards);
                Err(err)
            }
        }
    }

    pub async fn create_card(&mut self, draft: CardDraft) -> ClientResult<Card> {
        let now = Utc::now();
        let tmp = temp_id();
        let mut txn = Pending::new();
        txn.drop_card_on_rollback(&tmp);

        self.cards.insert_front(Card {
            id: tmp.clone(),
            stack_id: draft.stack_id.clone(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            cover: draft.cover.clone(),
            created_at: now,
            updated_at: now,
        });
        self.stacks.adjust_card_count(&draft.stack_id, 1);
        txn.count_applied(&draft.stack_id, 1);

        match self.api.create_card(&draft).await {
            Ok(created) => {
                self.cards.replace(&tmp, created.clone());
                Ok(created)
            }
            Err(err) => {
                txn.rollback(&mut self.stacks, &mut self.cards);
                Err(err)
            }
        }
    }

    pub async fn update_card(&mut self, id: &str, patch: CardPatch) -> ClientResult<()> {
        let mut txn = Pending::new();
        txn.save_cards(&self.cards);

        self.cards.merge(id, &patch, Utc::now());

        match self.api.update_card(id, &patch).await {
            Ok(_) => Ok(()),
            Err(err) => {
                txn.rollback(&mut self.stacks, &mut self.cards);
                Err(err)
            }
        }
    }

    pub async fn delete_card(&mut self, id: &str) -> ClientResult<()> {
        let Some(card) = self.cards.card_by_id(id) else {
            return Ok(());
        };
        let stack_id = card.stack_id.clone();

        let mut txn = Pending::new();
        txn.save_cards(&self.cards);

        self.cards.remove(id);
        self.stacks.adjust_card_count(&stack_id, -1);
        txn.count_applied(&stack_id, -1);

        match self.api.delete_card(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                txn.rollback(&mut self.stacks, &mut self.cards);
                Err(err)
            }
        }
    }

    pub async fn move_card(&mut self, id: &str, target_stack_id: &str) -> ClientResult<()> {
        let Some(card) = self.cards.card_by_id(id) else {
            return Ok(());
        };
        let source_stack_id = card.stack_id.clone();

        let mut txn = Pending::new();
        txn.save_cards(&self.cards);

        self.cards.reparent(id, target_stack_id, Utc::now());
        self.stacks.adjust_card_count(&source_stack_id, -1);
        txn.count_applied(&source_stack_id, -1);
        self.stacks.adjust_card_count(target_stack_id, 1);
        txn.count_applied(target_stack_id, 1);

        match self.api.move_card(id, target_stack_id).await {
            Ok(_) => Ok(()),
            Err(err) => {
                txn.rollback(&mut self.stacks, &mut self.cards);
                Err(err)
            }
        }
    }
}
