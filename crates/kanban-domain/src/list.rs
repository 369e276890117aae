use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};

pub type ListId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    pub fn new(id: ListId, title: String, order: u32) -> Self {
        Self {
            id,
            title,
            order,
            cards: Vec::new(),
        }
    }

    pub fn card_index(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
    }

    /// Rewrites every card's `order` to its 1-based sequence position.
    pub fn renumber_cards(&mut self) {
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.order = index as u32 + 1;
        }
    }
}
