//! Persisting moves the user already sees.
//!
//! By the time a payload reaches [`Reconciler::submit`] the store shows the
//! moved card. Submitting never blocks and its result never rewrites the
//! local order: success changes nothing, failure only flags the board as
//! unsynced so the user knows to reload. There is no retry, no rollback and
//! no coalescing of concurrent moves.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use kanban_api::BoardApi;
use kanban_core::KanbanError;
use kanban_domain::MovePayload;
use tokio::task::JoinHandle;

use crate::messages::MOVE_UNSYNCED;
use crate::state::BoardStore;

/// Result of persisting an optimistic change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing needed saving
    Unchanged,
    /// The backend accepted the change
    Confirmed,
    /// The backend rejected the change or could not be reached
    Failed(String),
}

impl SyncOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, SyncOutcome::Failed(_))
    }
}

/// Completion of a submitted move. Awaiting is optional: dropping the handle
/// leaves the request running.
#[derive(Debug)]
pub struct ReconcileHandle {
    inner: HandleInner,
}

#[derive(Debug)]
enum HandleInner {
    Task(JoinHandle<SyncOutcome>),
    Ready(Option<SyncOutcome>),
}

impl ReconcileHandle {
    pub fn spawned(task: JoinHandle<SyncOutcome>) -> Self {
        Self {
            inner: HandleInner::Task(task),
        }
    }

    /// A handle that is already complete
    pub fn ready(outcome: SyncOutcome) -> Self {
        Self {
            inner: HandleInner::Ready(Some(outcome)),
        }
    }
}

impl Future for ReconcileHandle {
    type Output = SyncOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.inner {
            HandleInner::Task(task) => match Pin::new(task).poll(cx) {
                Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
                Poll::Ready(Err(e)) => Poll::Ready(SyncOutcome::Failed(
                    KanbanError::Internal(format!("move task ended: {e}")).to_string(),
                )),
                Poll::Pending => Poll::Pending,
            },
            HandleInner::Ready(outcome) => Poll::Ready(
                outcome
                    .take()
                    .unwrap_or_else(|| SyncOutcome::Failed("outcome already taken".to_string())),
            ),
        }
    }
}

/// Seam between the drag controller and whatever persists its moves
pub trait Reconciler: Send + Sync {
    fn submit(&self, payload: MovePayload) -> ReconcileHandle;
}

/// Fire-and-forget `PATCH /cards/:id/move` on the tokio runtime
pub struct ReconciliationClient {
    api: Arc<dyn BoardApi>,
    store: BoardStore,
}

impl ReconciliationClient {
    pub fn new(api: Arc<dyn BoardApi>, store: BoardStore) -> Self {
        Self { api, store }
    }
}

impl Reconciler for ReconciliationClient {
    fn submit(&self, payload: MovePayload) -> ReconcileHandle {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                let err = KanbanError::Internal(format!("no async runtime: {e}"));
                tracing::error!("Cannot submit move of card {}: {}", payload.card_id, err);
                self.store.mark_unsynced(MOVE_UNSYNCED);
                return ReconcileHandle::ready(SyncOutcome::Failed(err.to_string()));
            }
        };

        let api = Arc::clone(&self.api);
        let store = self.store.clone();
        tracing::debug!(
            card_id = payload.card_id,
            list_id = payload.new_list_id,
            order = payload.new_order,
            "Submitting move"
        );

        ReconcileHandle::spawned(runtime.spawn(async move {
            match api.move_card(payload).await {
                Ok(()) => {
                    tracing::debug!("Move of card {} confirmed", payload.card_id);
                    SyncOutcome::Confirmed
                }
                Err(e) => {
                    tracing::warn!("Move of card {} failed: {}", payload.card_id, e);
                    store.mark_unsynced(MOVE_UNSYNCED);
                    SyncOutcome::Failed(e.to_string())
                }
            }
        }))
    }
}
