pub mod board;
pub mod card;
pub mod commands;
pub mod drop_target;
pub mod editable;
pub mod field_update;
pub mod list;
pub mod order;
pub mod user;
pub mod validation;

pub use board::{Board, BoardId, BoardSummary, CardLocation};
pub use card::{Card, CardId, CardUpdate};
pub use drop_target::{DropTarget, ResolvedTarget};
pub use editable::resolve_title_edit;
pub use field_update::FieldUpdate;
pub use list::{List, ListId};
pub use order::{apply_move, check_invariants, InvariantViolation, MoveOutcome, MovePayload};
pub use user::{User, UserId};
