use async_trait::async_trait;
use kanban_core::KanbanResult;
use kanban_domain::{Board, BoardId, BoardSummary, Card, CardId, List, ListId, MovePayload};

use crate::session::{Credentials, Session};

/// Account endpoints; these do not need a session
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> KanbanResult<Session>;

    async fn register(&self, credentials: &Credentials) -> KanbanResult<Session>;
}

/// Board, list and card endpoints of the backend
/// Implementations carry their own session; every call is authenticated
#[async_trait]
pub trait BoardApi: Send + Sync {
    async fn list_boards(&self) -> KanbanResult<Vec<BoardSummary>>;

    async fn create_board(&self, title: &str) -> KanbanResult<BoardSummary>;

    async fn rename_board(&self, board_id: BoardId, title: &str) -> KanbanResult<()>;

    async fn delete_board(&self, board_id: BoardId) -> KanbanResult<()>;

    /// Board with nested lists and cards, in whatever order the server sends
    async fn get_board(&self, board_id: BoardId) -> KanbanResult<Board>;

    async fn create_list(&self, board_id: BoardId, title: &str) -> KanbanResult<List>;

    async fn rename_list(&self, list_id: ListId, title: &str) -> KanbanResult<()>;

    async fn delete_list(&self, list_id: ListId) -> KanbanResult<()>;

    async fn create_card(&self, list_id: ListId, title: &str) -> KanbanResult<Card>;

    async fn update_card(
        &self,
        card_id: CardId,
        title: &str,
        description: Option<String>,
    ) -> KanbanResult<Card>;

    async fn delete_card(&self, card_id: CardId) -> KanbanResult<()>;

    /// Persist a card move; the response body, if any, is ignored
    async fn move_card(&self, payload: MovePayload) -> KanbanResult<()>;
}
