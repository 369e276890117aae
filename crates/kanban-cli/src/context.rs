use std::sync::Arc;

use kanban_api::{BoardApi, HttpBoardApi, Session};
use kanban_client::{BoardView, Dashboard};
use kanban_core::{AppConfig, KanbanError, KanbanResult};
use kanban_domain::BoardId;

/// Connection settings for one invocation: flags and env first, then the
/// config file, then the built-in default.
pub struct CliContext {
    api_url: String,
    token: Option<String>,
}

impl CliContext {
    pub fn new(api_url: Option<String>, token: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| AppConfig::load().effective_api_url().to_string());
        let token = token.filter(|t| !t.trim().is_empty());
        tracing::debug!("Using board server at {}", api_url);
        Self { api_url, token }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Client for the account endpoints, which need no session
    pub fn anonymous_api(&self) -> KanbanResult<HttpBoardApi> {
        HttpBoardApi::new(&self.api_url)
    }

    pub fn board_api(&self) -> KanbanResult<Arc<dyn BoardApi>> {
        let token = self.token.as_deref().ok_or_else(|| {
            KanbanError::Unauthorized(
                "No session token. Run `kanban login` and set KANBAN_TOKEN.".to_string(),
            )
        })?;
        let api = HttpBoardApi::new(&self.api_url)?.with_session(Session::from_token(token));
        Ok(Arc::new(api))
    }

    pub async fn dashboard(&self) -> KanbanResult<Dashboard> {
        let mut dashboard = Dashboard::new(self.board_api()?);
        dashboard.load().await?;
        Ok(dashboard)
    }

    /// Load a board; a board the server does not know is an error here
    pub async fn open_board(&self, board_id: BoardId) -> KanbanResult<BoardView> {
        let view = BoardView::new(self.board_api()?);
        view.load(board_id).await?;
        if !view.store().has_board() {
            return Err(KanbanError::NotFound(format!("Board {board_id}")));
        }
        Ok(view)
    }
}
