//! Drag session lifecycle: `Idle -> Dragging -> Resolving -> Idle`.
//!
//! The controller never looks at geometry. The hit-testing layer reports
//! what the pointer is over as a [`DropTarget`]; the controller resolves it
//! against the current board, publishes the new arrangement to the store and
//! hands the move to a [`Reconciler`].

use std::sync::Arc;

use kanban_domain::{apply_move, CardId, DropTarget, ListId, MoveOutcome, MovePayload};

use crate::reconcile::{ReconcileHandle, Reconciler};
use crate::state::BoardStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDrag {
    pub card_id: CardId,
    pub source_list_id: ListId,
    /// Latest candidate reported by hit-testing
    pub over: Option<DropTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging(ActiveDrag),
    Resolving(ActiveDrag),
}

#[derive(Debug)]
pub enum DropOutcome {
    /// No drag was in progress
    Ignored,
    /// No usable target; the board was not touched
    Aborted,
    /// The card was dropped where it already was
    Unchanged,
    /// The store already shows the move; `sync` completes when the backend
    /// answers
    Moved {
        payload: MovePayload,
        sync: ReconcileHandle,
    },
}

impl DropOutcome {
    pub fn payload(&self) -> Option<&MovePayload> {
        match self {
            DropOutcome::Moved { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

pub struct DragController {
    store: BoardStore,
    reconciler: Arc<dyn Reconciler>,
    state: DragState,
}

impl DragController {
    pub fn new(store: BoardStore, reconciler: Arc<dyn Reconciler>) -> Self {
        Self {
            store,
            reconciler,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        match &self.state {
            DragState::Dragging(active) | DragState::Resolving(active) => Some(active),
            DragState::Idle => None,
        }
    }

    /// Pick up a card. Returns false, staying idle, when the card is not on
    /// the board. Starting while already dragging abandons the earlier drag.
    pub fn start(&mut self, card_id: CardId) -> bool {
        let source = self.store.read(|board| {
            board
                .and_then(|b| b.locate_card(card_id).map(|loc| b.lists[loc.list_index].id))
        });

        match source {
            Some(source_list_id) => {
                tracing::debug!("Drag started: card {} from list {}", card_id, source_list_id);
                self.state = DragState::Dragging(ActiveDrag {
                    card_id,
                    source_list_id,
                    over: None,
                });
                true
            }
            None => {
                tracing::debug!("Ignoring drag of unknown card {}", card_id);
                self.state = DragState::Idle;
                false
            }
        }
    }

    /// Record the candidate target under the pointer
    pub fn hover(&mut self, target: Option<DropTarget>) {
        if let DragState::Dragging(active) = &mut self.state {
            active.over = target;
        }
    }

    /// Release over the most recently hovered target
    pub fn drop_on_hovered(&mut self) -> DropOutcome {
        let over = self.active().and_then(|a| a.over);
        self.drop(over)
    }

    /// Release the card over `over`
    pub fn drop(&mut self, over: Option<DropTarget>) -> DropOutcome {
        let DragState::Dragging(mut active) = self.state else {
            return DropOutcome::Ignored;
        };
        active.over = over;
        self.state = DragState::Resolving(active);

        let outcome = self.resolve(active);

        self.state = DragState::Idle;
        outcome
    }

    /// Abandon the drag without touching the board
    pub fn cancel(&mut self) {
        if let Some(active) = self.active() {
            tracing::debug!("Drag of card {} cancelled", active.card_id);
        }
        self.state = DragState::Idle;
    }

    fn resolve(&self, active: ActiveDrag) -> DropOutcome {
        let Some(target) = active.over else {
            tracing::debug!("Drag of card {} released over nothing", active.card_id);
            return DropOutcome::Aborted;
        };

        let applied = self.store.transform(|board| {
            let Some(resolved) = target.resolve(board) else {
                tracing::debug!("Drop target {:?} not on board", target);
                return (None, None);
            };
            if resolved.fallback {
                tracing::warn!(
                    "Drop target {:?} not found; inserting at top of list {}",
                    target,
                    resolved.list_id
                );
            }

            match apply_move(board, active.card_id, resolved.list_id, resolved.index) {
                Ok(MoveOutcome::Moved { board, payload }) => (Some(board), Some(Some(payload))),
                Ok(MoveOutcome::Unchanged) => (None, Some(None)),
                Err(e) => {
                    tracing::debug!("Move of card {} rejected: {}", active.card_id, e);
                    (None, None)
                }
            }
        });

        match applied.flatten() {
            None => DropOutcome::Aborted,
            Some(None) => DropOutcome::Unchanged,
            Some(Some(payload)) => {
                // Store is already updated; the request runs on its own.
                let sync = self.reconciler.submit(payload);
                DropOutcome::Moved { payload, sync }
            }
        }
    }
}
