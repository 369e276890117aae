//! User-facing status messages.

pub const MOVE_UNSYNCED: &str = "Could not save the change. Reload the board.";
pub const SAVE_FAILED: &str = "Failed to save the change. Reload.";
pub const DELETE_LIST_FAILED: &str = "Failed to delete the list. Reload the board.";
pub const DELETE_CARD_FAILED: &str = "Failed to delete the card. Reload the board.";
pub const DELETE_BOARD_FAILED: &str = "Failed to delete the board. Please reload.";
pub const LOAD_BOARD_FAILED: &str = "Failed to load the board.";
pub const LOAD_BOARDS_FAILED: &str = "Failed to load your boards.";
