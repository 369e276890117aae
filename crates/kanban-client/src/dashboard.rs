use std::sync::Arc;

use kanban_api::BoardApi;
use kanban_core::{KanbanError, KanbanResult};
use kanban_domain::validation::require_title;
use kanban_domain::{resolve_title_edit, BoardId, BoardSummary};

use crate::messages::{DELETE_BOARD_FAILED, LOAD_BOARDS_FAILED, SAVE_FAILED};
use crate::reconcile::SyncOutcome;

/// The signed-in user's board list
pub struct Dashboard {
    api: Arc<dyn BoardApi>,
    boards: Vec<BoardSummary>,
    error: Option<String>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn BoardApi>) -> Self {
        Self {
            api,
            boards: Vec::new(),
            error: None,
        }
    }

    pub fn boards(&self) -> &[BoardSummary] {
        &self.boards
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, board_id: BoardId) -> Option<&BoardSummary> {
        self.boards.iter().find(|b| b.id == board_id)
    }

    pub async fn load(&mut self) -> KanbanResult<()> {
        match self.api.list_boards().await {
            Ok(boards) => {
                tracing::info!("Loaded {} boards", boards.len());
                self.boards = boards;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load boards: {}", e);
                self.error = Some(LOAD_BOARDS_FAILED.to_string());
                Err(e)
            }
        }
    }

    pub async fn create_board(&mut self, title: &str) -> KanbanResult<BoardSummary> {
        let title = require_title(title)?;
        let board = self.api.create_board(&title).await?;
        self.boards.push(board.clone());
        Ok(board)
    }

    pub async fn rename_board(
        &mut self,
        board_id: BoardId,
        draft: &str,
    ) -> KanbanResult<SyncOutcome> {
        let board = self
            .boards
            .iter_mut()
            .find(|b| b.id == board_id)
            .ok_or_else(|| KanbanError::NotFound(format!("Board {board_id}")))?;
        let Some(title) = resolve_title_edit(&board.title, draft) else {
            return Ok(SyncOutcome::Unchanged);
        };
        board.title = title.clone();

        let result = self.api.rename_board(board_id, &title).await;
        Ok(self.settle(result, SAVE_FAILED))
    }

    pub async fn delete_board(&mut self, board_id: BoardId) -> KanbanResult<SyncOutcome> {
        let before = self.boards.len();
        self.boards.retain(|b| b.id != board_id);
        if self.boards.len() == before {
            return Err(KanbanError::NotFound(format!("Board {board_id}")));
        }

        let result = self.api.delete_board(board_id).await;
        Ok(self.settle(result, DELETE_BOARD_FAILED))
    }

    fn settle(&mut self, result: KanbanResult<()>, message: &str) -> SyncOutcome {
        match result {
            Ok(()) => SyncOutcome::Confirmed,
            Err(e) => {
                tracing::warn!("Board change not saved: {}", e);
                self.error = Some(message.to_string());
                SyncOutcome::Failed(e.to_string())
            }
        }
    }
}
