use clap::{ArgGroup, Args, Parser, Subcommand};
use kanban_domain::{BoardId, CardId, DropTarget, ListId};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "Command-line client for a kanban board server", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Base URL of the board server (or set KANBAN_API_URL env var)
    #[arg(long, global = true, value_name = "URL", env = "KANBAN_API_URL")]
    pub api_url: Option<String>,

    /// Session token printed by `kanban login` (or set KANBAN_TOKEN env var)
    #[arg(long, global = true, env = "KANBAN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and print a session token
    Login(AuthArgs),
    /// Create an account and print a session token
    Register(AuthArgs),
    /// Board operations
    Board(BoardCommand),
    /// List operations
    List(ListCommand),
    /// Card operations
    Card(CardCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct AuthArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "KANBAN_PASSWORD", hide_env_values = true)]
    pub password: String,
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// List your boards
    List,
    /// Create a new board
    Create {
        #[arg(long)]
        title: String,
    },
    /// Rename a board
    Rename {
        #[arg(long)]
        id: BoardId,
        #[arg(long)]
        title: String,
    },
    /// Delete a board with all of its lists and cards
    Delete {
        #[arg(long)]
        id: BoardId,
    },
    /// Show a board with its lists and cards in display order
    Show {
        #[arg(long)]
        id: BoardId,
    },
}

// List commands
#[derive(Args)]
pub struct ListCommand {
    #[command(subcommand)]
    pub action: ListAction,
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Append a new list to a board
    Create {
        #[arg(long)]
        board_id: BoardId,
        #[arg(long)]
        title: String,
    },
    /// Rename a list
    Rename {
        #[arg(long)]
        board_id: BoardId,
        #[arg(long)]
        id: ListId,
        #[arg(long)]
        title: String,
    },
    /// Delete a list and every card in it
    Delete {
        #[arg(long)]
        board_id: BoardId,
        #[arg(long)]
        id: ListId,
    },
}

// Card commands
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Append a new card to a list
    Create {
        #[arg(long)]
        board_id: BoardId,
        #[arg(long)]
        list_id: ListId,
        #[arg(long)]
        title: String,
    },
    /// Edit a card's title or description
    Update(CardUpdateArgs),
    /// Delete a card
    Delete {
        #[arg(long)]
        board_id: BoardId,
        #[arg(long)]
        id: CardId,
    },
    /// Move a card to the end of a list or in front of another card
    Move(CardMoveArgs),
}

#[derive(Args)]
pub struct CardUpdateArgs {
    #[arg(long)]
    pub board_id: BoardId,
    #[arg(long)]
    pub id: CardId,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,
    /// Remove the card's description
    #[arg(long)]
    pub clear_description: bool,
}

#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["to_list", "before_card"])))]
pub struct CardMoveArgs {
    #[arg(long)]
    pub board_id: BoardId,
    #[arg(long)]
    pub id: CardId,
    /// Drop onto a list, appending the card to its end
    #[arg(long)]
    pub to_list: Option<ListId>,
    /// Drop onto a card, taking its place
    #[arg(long)]
    pub before_card: Option<CardId>,
}

impl CardMoveArgs {
    pub fn target(&self) -> Option<DropTarget> {
        match (self.to_list, self.before_card) {
            (Some(list_id), _) => Some(DropTarget::list(list_id)),
            (None, Some(card_id)) => Some(DropTarget::card(card_id, None)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_move_requires_exactly_one_target() {
        let parse = |extra: &[&str]| {
            let mut args = vec!["kanban", "card", "move", "--board-id", "1", "--id", "2"];
            args.extend_from_slice(extra);
            Cli::try_parse_from(args)
        };

        assert!(parse(&[]).is_err());
        assert!(parse(&["--to-list", "3", "--before-card", "4"]).is_err());

        let Commands::Card(CardCommand {
            action: CardAction::Move(args),
        }) = parse(&["--before-card", "4"]).unwrap().command
        else {
            panic!("expected card move");
        };
        assert_eq!(args.target(), Some(DropTarget::card(4, None)));
    }
}
