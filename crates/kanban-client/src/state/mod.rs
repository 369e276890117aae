use kanban_core::KanbanResult;
use kanban_domain::commands::{Command, CommandContext};
use kanban_domain::{check_invariants, Board};
use parking_lot::RwLock;
use std::sync::Arc;

/// Whether local state is known to match the backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    Synced,
    /// A write the user already sees was rejected or never reached the
    /// backend. Cleared only by a reload.
    Unsynced { message: String },
}

impl SyncStatus {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncStatus::Synced)
    }
}

#[derive(Debug, Default)]
struct StoreState {
    board: Option<Board>,
    sync: SyncStatus,
    error: Option<String>,
    revision: u64,
}

/// Single source of truth for the board currently on screen
///
/// # Write Behavior
///
/// Every write replaces the whole board value:
/// - the current board is cloned, mutated, then swapped in under one lock
/// - a failed mutation leaves the previous board untouched
/// - concurrent writers are not merged; the last write wins
///
/// The store is a cheap cloneable handle, so the drag controller, the view
/// and in-flight reconciliation tasks can all hold it.
///
/// # Example
/// ```ignore
/// let store = BoardStore::with_board(board);
/// store.execute(&RenameList { list_id, title })?;
/// let board = store.snapshot();
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    inner: Arc<RwLock<StoreState>>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(board: Board) -> Self {
        let store = Self::new();
        store.reset(Some(board));
        store
    }

    /// Clone of the current board, if one is loaded
    pub fn snapshot(&self) -> Option<Board> {
        self.inner.read().board.clone()
    }

    /// Borrow the current board for the duration of `f`
    pub fn read<R>(&self, f: impl FnOnce(Option<&Board>) -> R) -> R {
        f(self.inner.read().board.as_ref())
    }

    pub fn has_board(&self) -> bool {
        self.inner.read().board.is_some()
    }

    /// Swap in a new board, keeping sync and error flags
    pub fn replace(&self, board: Board) {
        let mut state = self.inner.write();
        Self::publish(&mut state, board);
    }

    /// Read-modify-write under one lock. `f` returns the board to publish,
    /// or `None` to leave the store untouched, plus a value for the caller.
    /// Returns `None` when no board is loaded.
    pub fn transform<R>(&self, f: impl FnOnce(&Board) -> (Option<Board>, R)) -> Option<R> {
        let mut state = self.inner.write();
        let current = state.board.as_ref()?;
        let (next, result) = f(current);
        if let Some(next) = next {
            Self::publish(&mut state, next);
        }
        Some(result)
    }

    /// Run a domain command against a copy of the board and publish it.
    /// Returns `Ok(false)` when no board is loaded.
    pub fn execute(&self, command: &dyn Command) -> KanbanResult<bool> {
        let description = command.description();
        let mut state = self.inner.write();
        let Some(current) = state.board.as_ref() else {
            tracing::debug!("Skipping '{}': no board loaded", description);
            return Ok(false);
        };

        let mut next = current.clone();
        command.execute(&mut CommandContext::new(&mut next))?;
        tracing::debug!("Executed: {}", description);
        Self::publish(&mut state, next);
        Ok(true)
    }

    /// Replace everything with freshly fetched state. `None` means the board
    /// does not exist (not-found view).
    pub fn reset(&self, board: Option<Board>) {
        let mut state = self.inner.write();
        state.board = board;
        state.sync = SyncStatus::Synced;
        state.error = None;
        state.revision += 1;
    }

    pub fn sync_status(&self) -> SyncStatus {
        self.inner.read().sync.clone()
    }

    pub fn mark_unsynced(&self, message: impl Into<String>) {
        let message = message.into();
        let mut state = self.inner.write();
        tracing::warn!("Board marked unsynced: {}", message);
        state.sync = SyncStatus::Unsynced { message };
        state.revision += 1;
    }

    pub fn error(&self) -> Option<String> {
        self.inner.read().error.clone()
    }

    pub fn set_error(&self, message: impl Into<String>) {
        let mut state = self.inner.write();
        state.error = Some(message.into());
        state.revision += 1;
    }

    pub fn clear_error(&self) {
        let mut state = self.inner.write();
        if state.error.take().is_some() {
            state.revision += 1;
        }
    }

    /// Message to show the user, unsynced state first
    pub fn banner(&self) -> Option<String> {
        let state = self.inner.read();
        match &state.sync {
            SyncStatus::Unsynced { message } => Some(message.clone()),
            SyncStatus::Synced => state.error.clone(),
        }
    }

    /// Incremented on every write; lets a renderer skip unchanged frames
    pub fn revision(&self) -> u64 {
        self.inner.read().revision
    }

    fn publish(state: &mut StoreState, board: Board) {
        if let Err(violation) = check_invariants(&board) {
            tracing::debug!("Published board breaks ordering invariant: {}", violation);
        }
        state.board = Some(board);
        state.revision += 1;
    }
}
