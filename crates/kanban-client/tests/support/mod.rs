#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use kanban_api::BoardApi;
use kanban_core::{KanbanError, KanbanResult};
use kanban_domain::{Board, BoardId, BoardSummary, Card, CardId, List, ListId, MovePayload};
use parking_lot::Mutex;
use tokio::sync::Semaphore;

/// In-memory backend that records every call
pub struct FakeApi {
    board: Mutex<Option<Board>>,
    boards: Mutex<Vec<BoardSummary>>,
    calls: Mutex<Vec<String>>,
    moves: Mutex<Vec<MovePayload>>,
    failing: Mutex<HashSet<&'static str>>,
    move_gate: Option<Arc<Semaphore>>,
    next_id: AtomicI64,
}

impl FakeApi {
    pub fn new(board: Option<Board>) -> Self {
        Self {
            board: Mutex::new(board),
            boards: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            moves: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            move_gate: None,
            next_id: AtomicI64::new(1000),
        }
    }

    /// Moves block until a permit is added to the returned semaphore
    pub fn gated(board: Option<Board>) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let mut api = Self::new(board);
        api.move_gate = Some(Arc::clone(&gate));
        (api, gate)
    }

    pub fn with_boards(self, boards: Vec<BoardSummary>) -> Self {
        *self.boards.lock() = boards;
        self
    }

    pub fn fail(&self, op: &'static str) {
        self.failing.lock().insert(op);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn moves(&self) -> Vec<MovePayload> {
        self.moves.lock().clone()
    }

    fn record(&self, op: &'static str, detail: String) -> KanbanResult<()> {
        self.calls.lock().push(format!("{op} {detail}"));
        if self.failing.lock().contains(op) {
            return Err(KanbanError::Server {
                status: 500,
                message: format!("{op} failed"),
            });
        }
        Ok(())
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl BoardApi for FakeApi {
    async fn list_boards(&self) -> KanbanResult<Vec<BoardSummary>> {
        self.record("list_boards", String::new())?;
        Ok(self.boards.lock().clone())
    }

    async fn create_board(&self, title: &str) -> KanbanResult<BoardSummary> {
        self.record("create_board", title.to_string())?;
        Ok(summary(self.next_id(), title))
    }

    async fn rename_board(&self, board_id: BoardId, title: &str) -> KanbanResult<()> {
        self.record("rename_board", format!("{board_id} {title}"))
    }

    async fn delete_board(&self, board_id: BoardId) -> KanbanResult<()> {
        self.record("delete_board", board_id.to_string())
    }

    async fn get_board(&self, board_id: BoardId) -> KanbanResult<Board> {
        self.record("get_board", board_id.to_string())?;
        self.board
            .lock()
            .clone()
            .filter(|b| b.id == board_id)
            .ok_or_else(|| KanbanError::NotFound(format!("Board {board_id}")))
    }

    async fn create_list(&self, board_id: BoardId, title: &str) -> KanbanResult<List> {
        self.record("create_list", format!("{board_id} {title}"))?;
        Ok(List::new(self.next_id(), title.to_string(), 99))
    }

    async fn rename_list(&self, list_id: ListId, title: &str) -> KanbanResult<()> {
        self.record("rename_list", format!("{list_id} {title}"))
    }

    async fn delete_list(&self, list_id: ListId) -> KanbanResult<()> {
        self.record("delete_list", list_id.to_string())
    }

    async fn create_card(&self, list_id: ListId, title: &str) -> KanbanResult<Card> {
        self.record("create_card", format!("{list_id} {title}"))?;
        Ok(Card::new(self.next_id(), list_id, title.to_string(), 99))
    }

    async fn update_card(
        &self,
        card_id: CardId,
        title: &str,
        description: Option<String>,
    ) -> KanbanResult<Card> {
        self.record("update_card", format!("{card_id} {title}"))?;
        let mut card = Card::new(card_id, 0, title.to_string(), 0);
        card.description = description;
        Ok(card)
    }

    async fn delete_card(&self, card_id: CardId) -> KanbanResult<()> {
        self.record("delete_card", card_id.to_string())
    }

    async fn move_card(&self, payload: MovePayload) -> KanbanResult<()> {
        if let Some(gate) = &self.move_gate {
            gate.acquire()
                .await
                .map_err(|e| KanbanError::Internal(e.to_string()))?
                .forget();
        }
        self.moves.lock().push(payload);
        self.record("move_card", payload.card_id.to_string())
    }
}

pub fn summary(id: BoardId, title: &str) -> BoardSummary {
    BoardSummary {
        id,
        title: title.to_string(),
        user_id: None,
        created_at: None,
        updated_at: None,
    }
}

pub const TODO: ListId = 1;
pub const DOING: ListId = 2;
pub const DONE: ListId = 3;

/// Board 7 as the server sends it: lists and cards out of display order
pub fn server_board() -> Board {
    let mut board = Board::new(7, "Roadmap".to_string());

    let mut done = List::new(DONE, "Done".to_string(), 3);
    done.cards.push(Card::new(30, DONE, "shipped".to_string(), 1));

    let mut todo = List::new(TODO, "Todo".to_string(), 1);
    todo.cards.push(Card::new(12, TODO, "c".to_string(), 3));
    todo.cards.push(Card::new(10, TODO, "a".to_string(), 1));
    todo.cards.push(Card::new(11, TODO, "b".to_string(), 2));

    let mut doing = List::new(DOING, "Doing".to_string(), 2);
    doing.cards.push(Card::new(20, DOING, "wip".to_string(), 1));

    board.lists.push(done);
    board.lists.push(todo);
    board.lists.push(doing);
    board
}

pub fn card_ids(board: &Board, list_id: ListId) -> Vec<CardId> {
    board
        .find_list(list_id)
        .map(|l| l.cards.iter().map(|c| c.id).collect())
        .unwrap_or_default()
}
