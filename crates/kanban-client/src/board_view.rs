use std::sync::Arc;

use kanban_api::BoardApi;
use kanban_core::{KanbanError, KanbanResult};
use kanban_domain::commands::{
    AddCard, AddList, DeleteCard, DeleteList, RenameBoard, RenameList, ReplaceCard,
};
use kanban_domain::order::sort_by_order;
use kanban_domain::validation::require_title;
use kanban_domain::{resolve_title_edit, Board, BoardId, Card, CardId, CardUpdate, List, ListId};

use crate::drag::DragController;
use crate::messages::{DELETE_CARD_FAILED, DELETE_LIST_FAILED, LOAD_BOARD_FAILED, SAVE_FAILED};
use crate::reconcile::{ReconciliationClient, Reconciler, SyncOutcome};
use crate::state::BoardStore;

/// One board's detail page. Every write goes through the shared store.
///
/// Renames and deletes are optimistic: the store changes first, then the
/// request is made, and a failure only leaves a message behind. Creates and
/// card edits wait for the server because the ids and stored text come back
/// in the response.
pub struct BoardView {
    api: Arc<dyn BoardApi>,
    store: BoardStore,
    reconciler: Arc<dyn Reconciler>,
}

impl BoardView {
    pub fn new(api: Arc<dyn BoardApi>) -> Self {
        let store = BoardStore::new();
        let reconciler = Arc::new(ReconciliationClient::new(Arc::clone(&api), store.clone()));
        Self::with_parts(api, store, reconciler)
    }

    pub fn with_parts(
        api: Arc<dyn BoardApi>,
        store: BoardStore,
        reconciler: Arc<dyn Reconciler>,
    ) -> Self {
        Self {
            api,
            store,
            reconciler,
        }
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// A drag controller bound to this view's store and reconciler
    pub fn drag_controller(&self) -> DragController {
        DragController::new(self.store.clone(), Arc::clone(&self.reconciler))
    }

    /// Fetch the board and make it the current state. A missing board
    /// leaves the store empty and is not an error.
    pub async fn load(&self, board_id: BoardId) -> KanbanResult<()> {
        match self.api.get_board(board_id).await {
            Ok(mut board) => {
                sort_by_order(&mut board);
                tracing::info!(
                    "Loaded board {} ({} lists, {} cards)",
                    board.id,
                    board.lists.len(),
                    board.card_count()
                );
                self.store.reset(Some(board));
                Ok(())
            }
            Err(KanbanError::NotFound(_)) => {
                tracing::info!("Board {} not found", board_id);
                self.store.reset(None);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load board {}: {}", board_id, e);
                self.store.set_error(LOAD_BOARD_FAILED);
                Err(e)
            }
        }
    }

    pub async fn create_list(&self, title: &str) -> KanbanResult<List> {
        let title = require_title(title)?;
        let board_id = self.current_board_id()?;
        let list = self.api.create_list(board_id, &title).await?;
        self.store.execute(&AddList { list: list.clone() })?;
        Ok(list)
    }

    pub async fn create_card(&self, list_id: ListId, title: &str) -> KanbanResult<Card> {
        let title = require_title(title)?;
        self.ensure(|b| b.find_list(list_id).is_some(), || format!("List {list_id}"))?;
        let card = self.api.create_card(list_id, &title).await?;
        self.store.execute(&AddCard {
            list_id,
            card: card.clone(),
        })?;
        Ok(card)
    }

    /// Save a card edit and take the server's copy of the text fields
    pub async fn update_card(&self, card_id: CardId, update: &CardUpdate) -> KanbanResult<Card> {
        let (title, description) = self
            .store
            .read(|board| {
                board
                    .and_then(|b| b.find_card(card_id))
                    .map(|c| c.preview_update(update))
            })
            .ok_or_else(|| KanbanError::NotFound(format!("Card {card_id}")))?;
        let title = require_title(&title)?;

        let card = self.api.update_card(card_id, &title, description).await?;
        self.store.execute(&ReplaceCard { card: card.clone() })?;
        Ok(card)
    }

    pub async fn rename_board(&self, draft: &str) -> KanbanResult<SyncOutcome> {
        let (board_id, current) = self
            .store
            .read(|board| board.map(|b| (b.id, b.title.clone())))
            .ok_or_else(no_board)?;
        let Some(title) = resolve_title_edit(&current, draft) else {
            return Ok(SyncOutcome::Unchanged);
        };

        self.store.execute(&RenameBoard {
            title: title.clone(),
        })?;
        Ok(self.settle(self.api.rename_board(board_id, &title).await, SAVE_FAILED))
    }

    pub async fn rename_list(&self, list_id: ListId, draft: &str) -> KanbanResult<SyncOutcome> {
        let current = self
            .store
            .read(|board| board.and_then(|b| b.find_list(list_id)).map(|l| l.title.clone()))
            .ok_or_else(|| KanbanError::NotFound(format!("List {list_id}")))?;
        let Some(title) = resolve_title_edit(&current, draft) else {
            return Ok(SyncOutcome::Unchanged);
        };

        self.store.execute(&RenameList {
            list_id,
            title: title.clone(),
        })?;
        Ok(self.settle(self.api.rename_list(list_id, &title).await, SAVE_FAILED))
    }

    /// Remove a list and all of its cards
    pub async fn delete_list(&self, list_id: ListId) -> KanbanResult<SyncOutcome> {
        self.ensure(|b| b.find_list(list_id).is_some(), || format!("List {list_id}"))?;
        self.store.execute(&DeleteList { list_id })?;
        Ok(self.settle(self.api.delete_list(list_id).await, DELETE_LIST_FAILED))
    }

    pub async fn delete_card(&self, card_id: CardId) -> KanbanResult<SyncOutcome> {
        self.ensure(|b| b.find_card(card_id).is_some(), || format!("Card {card_id}"))?;
        self.store.execute(&DeleteCard { card_id })?;
        Ok(self.settle(self.api.delete_card(card_id).await, DELETE_CARD_FAILED))
    }

    fn current_board_id(&self) -> KanbanResult<BoardId> {
        self.store
            .read(|board| board.map(|b| b.id))
            .ok_or_else(no_board)
    }

    fn ensure(
        &self,
        exists: impl FnOnce(&Board) -> bool,
        what: impl FnOnce() -> String,
    ) -> KanbanResult<()> {
        if self.store.read(|board| board.is_some_and(exists)) {
            Ok(())
        } else {
            Err(KanbanError::NotFound(what()))
        }
    }

    fn settle(&self, result: KanbanResult<()>, message: &str) -> SyncOutcome {
        match result {
            Ok(()) => SyncOutcome::Confirmed,
            Err(e) => {
                tracing::warn!("Optimistic change not saved: {}", e);
                self.store.set_error(message);
                SyncOutcome::Failed(e.to_string())
            }
        }
    }
}

fn no_board() -> KanbanError {
    KanbanError::NotFound("No board loaded".to_string())
}
