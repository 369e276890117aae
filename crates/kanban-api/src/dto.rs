//! Request and response bodies that exist only on the wire.

use kanban_domain::{ListId, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleRequest {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardUpdateRequest {
    pub title: String,
    pub description: Option<String>,
}

/// Body of `PATCH /cards/:id/move`; the card id travels in the path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub new_list_id: ListId,
    pub new_order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_request_is_camel_case() {
        let body = serde_json::to_value(MoveRequest {
            new_list_id: 4,
            new_order: 2,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"newListId": 4, "newOrder": 2}));
    }

    #[test]
    fn test_card_update_sends_null_description() {
        let body = serde_json::to_value(CardUpdateRequest {
            title: "t".to_string(),
            description: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"title": "t", "description": null}));
    }
}
