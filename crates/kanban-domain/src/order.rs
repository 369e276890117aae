//! Card ordering model.
//!
//! Pure functions over [`Board`] snapshots. Nothing here performs I/O or
//! mutates its input, so a caller can compute a new arrangement, show it
//! immediately and still hold the previous snapshot.
//!
//! Invariants maintained by every function that returns a board:
//! - card `order` values within a list are exactly `1..=len`
//! - a card's `list_id` names the list whose sequence contains it
//! - list `order` values are untouched by card moves

use std::collections::HashSet;

use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::card::CardId;
use crate::list::ListId;

/// Minimal description of a move, as sent to `PATCH /cards/:id/move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovePayload {
    pub card_id: CardId,
    pub new_list_id: ListId,
    /// 1-based position of the card in its list after the move
    pub new_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The card would land where it already is.
    Unchanged,
    Moved { board: Board, payload: MovePayload },
}

impl MoveOutcome {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, MoveOutcome::Unchanged)
    }

    pub fn payload(&self) -> Option<&MovePayload> {
        match self {
            MoveOutcome::Unchanged => None,
            MoveOutcome::Moved { payload, .. } => Some(payload),
        }
    }
}

/// Computes the board that results from moving `card_id` into
/// `target_list_id` at `target_index`.
///
/// `target_index` is an insertion index into the target list *after* the
/// card has been removed from its source, clamped to the list's length.
pub fn apply_move(
    board: &Board,
    card_id: CardId,
    target_list_id: ListId,
    target_index: usize,
) -> KanbanResult<MoveOutcome> {
    let source = board
        .locate_card(card_id)
        .ok_or_else(|| KanbanError::NotFound(format!("Card {card_id}")))?;
    let target_list_index = board
        .list_index(target_list_id)
        .ok_or_else(|| KanbanError::NotFound(format!("List {target_list_id}")))?;

    let same_list = source.list_index == target_list_index;
    if same_list {
        let remaining = board.lists[source.list_index].cards.len() - 1;
        if target_index.min(remaining) == source.card_index {
            return Ok(MoveOutcome::Unchanged);
        }
    }

    let mut next = board.clone();
    let mut card = next.lists[source.list_index]
        .cards
        .remove(source.card_index);
    card.move_to_list(target_list_id);

    let target = &mut next.lists[target_list_index];
    let final_index = target_index.min(target.cards.len());
    target.cards.insert(final_index, card);
    target.renumber_cards();

    if !same_list {
        next.lists[source.list_index].renumber_cards();
    }

    Ok(MoveOutcome::Moved {
        board: next,
        payload: MovePayload {
            card_id,
            new_list_id: target_list_id,
            new_order: final_index as u32 + 1,
        },
    })
}

/// Sorts lists and each list's cards by their `order` field, ascending.
/// The sort is stable and the `order` values themselves are left alone.
pub fn sort_by_order(board: &mut Board) {
    board.lists.sort_by_key(|l| l.order);
    for list in &mut board.lists {
        list.cards.sort_by_key(|c| c.order);
    }
}

/// Rewrites list `order` values to their 1-based sequence position.
pub fn renumber_lists(board: &mut Board) {
    for (index, list) in board.lists.iter_mut().enumerate() {
        list.order = index as u32 + 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("list {list_id}: card at position {position} has order {found}")]
    CardOrder {
        list_id: ListId,
        position: usize,
        found: u32,
    },

    #[error("card {card_id} is in list {container} but claims list {claimed}")]
    ListIdMismatch {
        card_id: CardId,
        container: ListId,
        claimed: ListId,
    },

    #[error("card {card_id} appears more than once")]
    DuplicateCard { card_id: CardId },

    #[error("list {list_id} at position {position} has order {found}")]
    ListOrder {
        list_id: ListId,
        position: usize,
        found: u32,
    },
}

/// Returns the first invariant violation found, scanning lists in sequence.
pub fn check_invariants(board: &Board) -> Result<(), InvariantViolation> {
    let mut seen = HashSet::new();

    for (list_position, list) in board.lists.iter().enumerate() {
        if list.order as usize != list_position + 1 {
            return Err(InvariantViolation::ListOrder {
                list_id: list.id,
                position: list_position,
                found: list.order,
            });
        }

        for (position, card) in list.cards.iter().enumerate() {
            if !seen.insert(card.id) {
                return Err(InvariantViolation::DuplicateCard { card_id: card.id });
            }
            if card.list_id != list.id {
                return Err(InvariantViolation::ListIdMismatch {
                    card_id: card.id,
                    container: list.id,
                    claimed: card.list_id,
                });
            }
            if card.order as usize != position + 1 {
                return Err(InvariantViolation::CardOrder {
                    list_id: list.id,
                    position,
                    found: card.order,
                });
            }
        }
    }

    Ok(())
}
