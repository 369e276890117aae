use super::{Command, CommandContext};
use kanban_core::KanbanResult;

/// Rename the board itself
pub struct RenameBoard {
    pub title: String,
}

impl Command for RenameBoard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context.board.update_title(self.title.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Rename board to '{}'", self.title)
    }
}
