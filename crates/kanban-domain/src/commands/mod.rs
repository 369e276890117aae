use kanban_core::KanbanResult;

pub mod board_commands;
pub mod card_commands;
pub mod list_commands;

pub use board_commands::*;
pub use card_commands::*;
pub use list_commands::*;

/// Trait for domain commands that mutate a board
/// Commands represent intent; the caller decides when the result is published
pub trait Command: Send + Sync {
    /// Execute this command, mutating the board in place
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub board: &'a mut crate::Board,
}

impl<'a> CommandContext<'a> {
    pub fn new(board: &'a mut crate::Board) -> Self {
        Self { board }
    }
}
