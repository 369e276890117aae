use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::list::{List, ListId};
use crate::user::UserId;

pub type BoardId = i64;

/// A board as shown on its detail page: lists in display order, each holding
/// its cards in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub lists: Vec<List>,
}

/// Dashboard row returned by `GET /boards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Where a card sits inside a board: index of its list, index within that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocation {
    pub list_index: usize,
    pub card_index: usize,
}

impl Board {
    pub fn new(id: BoardId, title: String) -> Self {
        Self {
            id,
            title,
            lists: Vec::new(),
        }
    }

    pub fn find_list(&self, list_id: ListId) -> Option<&List> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    pub fn find_list_mut(&mut self, list_id: ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| l.id == list_id)
    }

    pub fn list_index(&self, list_id: ListId) -> Option<usize> {
        self.lists.iter().position(|l| l.id == list_id)
    }

    /// Finds a card by scanning every list's sequence. The card's `list_id`
    /// field is not consulted.
    pub fn locate_card(&self, card_id: CardId) -> Option<CardLocation> {
        self.lists.iter().enumerate().find_map(|(list_index, list)| {
            list.card_index(card_id).map(|card_index| CardLocation {
                list_index,
                card_index,
            })
        })
    }

    pub fn find_card(&self, card_id: CardId) -> Option<&Card> {
        self.locate_card(card_id)
            .map(|loc| &self.lists[loc.list_index].cards[loc.card_index])
    }

    pub fn find_card_mut(&mut self, card_id: CardId) -> Option<&mut Card> {
        let loc = self.locate_card(card_id)?;
        Some(&mut self.lists[loc.list_index].cards[loc.card_index])
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
    }
}
