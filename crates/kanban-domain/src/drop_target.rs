use crate::board::Board;
use crate::card::CardId;
use crate::list::ListId;

/// What the pointer is over when a dragged card is released, as reported by
/// the hit-testing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Empty area of a list; the card goes to the end.
    List { list_id: ListId },
    /// Another card; the dragged card takes its position. `container` is the
    /// list the hit-test believes holds that card.
    Card {
        card_id: CardId,
        container: Option<ListId>,
    },
}

/// A drop target resolved against a concrete board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub list_id: ListId,
    pub index: usize,
    /// True when the target card was missing and `container` was used instead.
    pub fallback: bool,
}

impl DropTarget {
    pub fn list(list_id: ListId) -> Self {
        DropTarget::List { list_id }
    }

    pub fn card(card_id: CardId, container: Option<ListId>) -> Self {
        DropTarget::Card { card_id, container }
    }

    /// Resolves to a list and insertion index, or `None` when neither the
    /// target nor its container hint exists in `board`.
    ///
    /// A card target that cannot be found (stale id, concurrent delete) falls
    /// back to index 0 of its container hint.
    pub fn resolve(&self, board: &Board) -> Option<ResolvedTarget> {
        match *self {
            DropTarget::List { list_id } => board.find_list(list_id).map(|list| ResolvedTarget {
                list_id,
                index: list.cards.len(),
                fallback: false,
            }),
            DropTarget::Card { card_id, container } => match board.locate_card(card_id) {
                Some(loc) => Some(ResolvedTarget {
                    list_id: board.lists[loc.list_index].id,
                    index: loc.card_index,
                    fallback: false,
                }),
                None => container
                    .and_then(|list_id| board.find_list(list_id))
                    .map(|list| ResolvedTarget {
                        list_id: list.id,
                        index: 0,
                        fallback: true,
                    }),
            },
        }
    }
}
