use super::{Command, CommandContext};
use crate::{Card, CardId, ListId};
use kanban_core::{KanbanError, KanbanResult};

/// Append a card the server has just created to the end of its list
pub struct AddCard {
    pub list_id: ListId,
    pub card: Card,
}

impl Command for AddCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        let list = context
            .board
            .find_list_mut(self.list_id)
            .ok_or_else(|| KanbanError::NotFound(format!("List {}", self.list_id)))?;
        let mut card = self.card.clone();
        card.move_to_list(self.list_id);
        card.order = list.cards.len() as u32 + 1;
        list.cards.push(card);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add card: '{}'", self.card.title)
    }
}

/// Replace a card's text fields with the server's copy, keeping its place
pub struct ReplaceCard {
    pub card: Card,
}

impl Command for ReplaceCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        if let Some(card) = context.board.find_card_mut(self.card.id) {
            card.update_title(self.card.title.clone());
            card.update_description(self.card.description.clone());
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update card {}", self.card.id)
    }
}

pub struct DeleteCard {
    pub card_id: CardId,
}

impl Command for DeleteCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        if let Some(loc) = context.board.locate_card(self.card_id) {
            let list = &mut context.board.lists[loc.list_index];
            list.cards.remove(loc.card_index);
            list.renumber_cards();
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete card {}", self.card_id)
    }
}
