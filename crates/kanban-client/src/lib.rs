pub mod auth;
pub mod board_view;
pub mod dashboard;
pub mod drag;
pub mod messages;
pub mod reconcile;
pub mod state;

pub use board_view::BoardView;
pub use dashboard::Dashboard;
pub use drag::{ActiveDrag, DragController, DragState, DropOutcome};
pub use reconcile::{ReconcileHandle, ReconciliationClient, Reconciler, SyncOutcome};
pub use state::{BoardStore, SyncStatus};
