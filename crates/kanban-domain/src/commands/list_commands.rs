use super::{Command, CommandContext};
use crate::order::renumber_lists;
use crate::{List, ListId};
use kanban_core::KanbanResult;

/// Append a list the server has just created
pub struct AddList {
    pub list: List,
}

impl Command for AddList {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        let mut list = self.list.clone();
        list.cards.clear();
        list.order = context.board.lists.len() as u32 + 1;
        context.board.lists.push(list);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add list: '{}'", self.list.title)
    }
}

pub struct RenameList {
    pub list_id: ListId,
    pub title: String,
}

impl Command for RenameList {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        if let Some(list) = context.board.find_list_mut(self.list_id) {
            list.update_title(self.title.clone());
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Rename list {} to '{}'", self.list_id, self.title)
    }
}

/// Delete a list together with every card it holds
pub struct DeleteList {
    pub list_id: ListId,
}

impl Command for DeleteList {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        let before = context.board.lists.len();
        context.board.lists.retain(|l| l.id != self.list_id);
        if context.board.lists.len() != before {
            renumber_lists(context.board);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete list {}", self.list_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::check_invariants;
    use crate::{Board, Card};

    fn board() -> Board {
        let mut board = Board::new(1, "Board".to_string());
        for (id, order) in [(10, 1), (20, 2), (30, 3)] {
            let mut list = List::new(id, format!("L{id}"), order);
            list.cards.push(Card::new(id + 1, id, "card".to_string(), 1));
            board.lists.push(list);
        }
        board
    }

    #[test]
    fn test_add_list_appends_empty_list() {
        let mut board = board();
        let mut incoming = List::new(40, "New".to_string(), 17);
        incoming.cards.push(Card::new(99, 40, "stray".to_string(), 1));

        AddList { list: incoming }
            .execute(&mut CommandContext::new(&mut board))
            .unwrap();

        let added = board.lists.last().unwrap();
        assert_eq!(added.id, 40);
        assert_eq!(added.order, 4);
        assert!(added.cards.is_empty());
        check_invariants(&board).unwrap();
    }

    #[test]
    fn test_delete_list_cascades_cards() {
        let mut board = board();
        DeleteList { list_id: 20 }
            .execute(&mut CommandContext::new(&mut board))
            .unwrap();

        assert!(board.find_list(20).is_none());
        assert!(board.find_card(21).is_none());
        assert!(board
            .lists
            .iter()
            .flat_map(|l| &l.cards)
            .all(|c| c.list_id != 20));
        check_invariants(&board).unwrap();
    }

    #[test]
    fn test_delete_missing_list_is_noop() {
        let mut board = board();
        let before = board.clone();
        DeleteList { list_id: 999 }
            .execute(&mut CommandContext::new(&mut board))
            .unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_rename_list() {
        let mut board = board();
        RenameList {
            list_id: 30,
            title: "Shipped".to_string(),
        }
        .execute(&mut CommandContext::new(&mut board))
        .unwrap();
        assert_eq!(board.find_list(30).unwrap().title, "Shipped");
    }
}
