//! Image Item Lifecycle
//!
//! Delete state machine for a single gallery entry. Phases only move
//! forward; once a delete is requested the item never becomes usable again.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ItemPhase {
    #[default]
    Present,
    /// Delete request in flight
    DeletePending,
    /// Server refused or was unreachable. Stuck and disabled, no retry.
    DeleteFailed(String),
    /// Server confirmed; the gallery is about to drop the item
    Deleted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemEvent {
    DeleteRequested,
    DeleteConfirmed,
    DeleteFailed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemEffect {
    SendDelete,
}

impl ItemPhase {
    pub fn apply(self, event: ItemEvent) -> (ItemPhase, Option<ItemEffect>) {
        match (self, event) {
            (ItemPhase::Present, ItemEvent::DeleteRequested) => {
                (ItemPhase::DeletePending, Some(ItemEffect::SendDelete))
            }
            (ItemPhase::DeletePending, ItemEvent::DeleteConfirmed) => (ItemPhase::Deleted, None),
            (ItemPhase::DeletePending, ItemEvent::DeleteFailed(reason)) => {
                (ItemPhase::DeleteFailed(reason), None)
            }
            (phase, _) => (phase, None),
        }
    }

    /// Display and Delete are only usable before any delete was requested
    pub fn controls_disabled(&self) -> bool {
        !matches!(self, ItemPhase::Present)
    }
}
