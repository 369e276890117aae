use serde::{Deserialize, Serialize};

use crate::field_update::FieldUpdate;
use crate::list::ListId;

pub type CardId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub list_id: ListId,
}

/// Partial edit of a card's text fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub description: FieldUpdate<String>,
}

impl Card {
    pub fn new(id: CardId, list_id: ListId, title: String, order: u32) -> Self {
        Self {
            id,
            title,
            description: None,
            order,
            list_id,
        }
    }

    pub fn move_to_list(&mut self, list_id: ListId) {
        self.list_id = list_id;
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Field values the card would have after `update`, without touching it.
    /// Blank descriptions collapse to `None`.
    pub fn preview_update(&self, update: &CardUpdate) -> (String, Option<String>) {
        let title = update
            .title
            .as_deref()
            .map(str::trim)
            .unwrap_or(self.title.as_str())
            .to_string();
        let mut description = self.description.clone();
        update.description.clone().apply_to(&mut description);
        let description = description.filter(|d| !d.trim().is_empty());
        (title, description)
    }
}
