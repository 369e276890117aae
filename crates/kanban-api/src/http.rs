use async_trait::async_trait;
use kanban_core::{AppConfig, KanbanError, KanbanResult};
use kanban_domain::{Board, BoardId, BoardSummary, Card, CardId, List, ListId, MovePayload};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::dto::{AuthResponse, CardUpdateRequest, MoveRequest, TitleRequest};
use crate::session::{Credentials, Session};
use crate::traits::{AuthApi, BoardApi};

/// `BoardApi` over JSON/HTTP with bearer-token authentication.
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    http: Client,
    base_url: String,
    session: Option<Session>,
}

impl HttpBoardApi {
    pub fn new(base_url: &str) -> KanbanResult<Self> {
        let url = AppConfig::parse_api_url(base_url)?;
        Ok(Self {
            http: Client::new(),
            base_url: url.as_str().trim_end_matches('/').to_string(),
            session: None,
        })
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder) -> KanbanResult<RequestBuilder> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| KanbanError::Unauthorized("Not logged in.".to_string()))?;
        Ok(builder.bearer_auth(&session.token))
    }

    async fn send(builder: RequestBuilder) -> KanbanResult<Response> {
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, body = %body, "request rejected");
        Err(status_error(status, &body))
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> KanbanResult<T> {
        let bytes = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&bytes).map_err(|e| KanbanError::Serialization(e.to_string()))
    }

    async fn authenticate(&self, path: &str, credentials: &Credentials) -> KanbanResult<Session> {
        let response = Self::send(self.http.post(self.url(path)).json(credentials)).await?;
        let body: AuthResponse = Self::read_json(response).await?;
        Ok(Session::new(body.token, Some(body.user)))
    }
}

fn transport_error(err: reqwest::Error) -> KanbanError {
    if err.is_decode() {
        KanbanError::Serialization(err.to_string())
    } else {
        KanbanError::Network(err.to_string())
    }
}

/// Maps a non-2xx status onto the error taxonomy. The body is used as the
/// message when the server sent one.
pub fn status_error(status: StatusCode, body: &str) -> KanbanError {
    let message = extract_message(body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => KanbanError::Unauthorized(message),
        StatusCode::NOT_FOUND => KanbanError::NotFound(message),
        StatusCode::CONFLICT => KanbanError::Conflict(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            KanbanError::Validation(message)
        }
        _ => KanbanError::Server {
            status: status.as_u16(),
            message,
        },
    }
}

/// Accepts `{"message": ".."}`, `{"error": ".."}` or a plain-text body.
fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return Some(text.to_string());
            }
        }
        return None;
    }
    Some(trimmed.to_string())
}

#[async_trait]
impl AuthApi for HttpBoardApi {
    async fn login(&self, credentials: &Credentials) -> KanbanResult<Session> {
        self.authenticate("/auth/login", credentials)
            .await
            .map_err(|e| match e {
                KanbanError::Unauthorized(_) => {
                    KanbanError::Unauthorized("Invalid email or password.".to_string())
                }
                other => other,
            })
    }

    async fn register(&self, credentials: &Credentials) -> KanbanResult<Session> {
        self.authenticate("/auth/register", credentials)
            .await
            .map_err(|e| match e {
                KanbanError::Conflict(_) => {
                    KanbanError::Conflict("This email is already in use.".to_string())
                }
                other => other,
            })
    }
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn list_boards(&self) -> KanbanResult<Vec<BoardSummary>> {
        let request = self.authed(self.http.get(self.url("/boards")))?;
        Self::read_json(Self::send(request).await?).await
    }

    async fn create_board(&self, title: &str) -> KanbanResult<BoardSummary> {
        let request = self.authed(self.http.post(self.url("/boards")))?.json(&TitleRequest {
            title: title.to_string(),
        });
        Self::read_json(Self::send(request).await?).await
    }

    async fn rename_board(&self, board_id: BoardId, title: &str) -> KanbanResult<()> {
        let request = self
            .authed(self.http.put(self.url(&format!("/boards/{board_id}"))))?
            .json(&TitleRequest {
                title: title.to_string(),
            });
        Self::send(request).await.map(|_| ())
    }

    async fn delete_board(&self, board_id: BoardId) -> KanbanResult<()> {
        let request = self.authed(self.http.delete(self.url(&format!("/boards/{board_id}"))))?;
        Self::send(request).await.map(|_| ())
    }

    async fn get_board(&self, board_id: BoardId) -> KanbanResult<Board> {
        let request = self.authed(self.http.get(self.url(&format!("/boards/{board_id}"))))?;
        Self::read_json(Self::send(request).await?).await
    }

    async fn create_list(&self, board_id: BoardId, title: &str) -> KanbanResult<List> {
        let request = self
            .authed(self.http.post(self.url(&format!("/boards/{board_id}/lists"))))?
            .json(&TitleRequest {
                title: title.to_string(),
            });
        Self::read_json(Self::send(request).await?).await
    }

    async fn rename_list(&self, list_id: ListId, title: &str) -> KanbanResult<()> {
        let request = self
            .authed(self.http.put(self.url(&format!("/lists/{list_id}"))))?
            .json(&TitleRequest {
                title: title.to_string(),
            });
        Self::send(request).await.map(|_| ())
    }

    async fn delete_list(&self, list_id: ListId) -> KanbanResult<()> {
        let request = self.authed(self.http.delete(self.url(&format!("/lists/{list_id}"))))?;
        Self::send(request).await.map(|_| ())
    }

    async fn create_card(&self, list_id: ListId, title: &str) -> KanbanResult<Card> {
        let request = self
            .authed(self.http.post(self.url(&format!("/lists/{list_id}/cards"))))?
            .json(&TitleRequest {
                title: title.to_string(),
            });
        Self::read_json(Self::send(request).await?).await
    }

    async fn update_card(
        &self,
        card_id: CardId,
        title: &str,
        description: Option<String>,
    ) -> KanbanResult<Card> {
        let request = self
            .authed(self.http.put(self.url(&format!("/cards/{card_id}"))))?
            .json(&CardUpdateRequest {
                title: title.to_string(),
                description,
            });
        Self::read_json(Self::send(request).await?).await
    }

    async fn delete_card(&self, card_id: CardId) -> KanbanResult<()> {
        let request = self.authed(self.http.delete(self.url(&format!("/cards/{card_id}"))))?;
        Self::send(request).await.map(|_| ())
    }

    async fn move_card(&self, payload: MovePayload) -> KanbanResult<()> {
        let request = self
            .authed(
                self.http
                    .patch(self.url(&format!("/cards/{}/move", payload.card_id))),
            )?
            .json(&MoveRequest {
                new_list_id: payload.new_list_id,
                new_order: payload.new_order,
            });
        Self::send(request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, ""),
            KanbanError::Unauthorized(_)
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, ""),
            KanbanError::NotFound(_)
        ));
        assert!(matches!(
            status_error(StatusCode::CONFLICT, ""),
            KanbanError::Conflict(_)
        ));
        assert!(matches!(
            status_error(StatusCode::UNPROCESSABLE_ENTITY, ""),
            KanbanError::Validation(_)
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, ""),
            KanbanError::Server { status: 502, .. }
        ));
    }

    #[test]
    fn test_status_error_uses_body_message() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":"db down"}"#);
        assert_eq!(err.to_string(), "Server error (500): db down");

        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "plain failure");
        assert_eq!(err.to_string(), "Server error (500): plain failure");

        let err = status_error(StatusCode::NOT_FOUND, "");
        assert_eq!(err.to_string(), "Not found: Not Found");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let api = HttpBoardApi::new("http://localhost:3000/api/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:3000/api");
        assert_eq!(api.url("/boards"), "http://localhost:3000/api/boards");

        let api = HttpBoardApi::new("http://localhost:3000/").unwrap();
        assert_eq!(api.url("/boards"), "http://localhost:3000/boards");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpBoardApi::new("::nope::"),
            Err(KanbanError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_authed_call_without_session_never_sends() {
        let api = HttpBoardApi::new("http://127.0.0.1:9").unwrap();
        let err = api.list_boards().await.unwrap_err();
        assert!(matches!(err, KanbanError::Unauthorized(_)));
    }
}
