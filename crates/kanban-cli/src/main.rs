mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use kanban_core::KanbanError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("KANBAN_DEBUG_LOG") {
        let log_file = match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => file,
            Err(e) => output::output_error(&KanbanError::from(e).to_string()),
        };

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // stderr carries the error envelope, so logs stay off unless asked for.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();
    }

    let cli = Cli::parse();
    let ctx = CliContext::new(cli.api_url, cli.token);

    let result = match cli.command {
        Commands::Login(args) => handlers::auth::login(&ctx, args).await,
        Commands::Register(args) => handlers::auth::register(&ctx, args).await,
        Commands::Board(board_cmd) => handlers::board::handle(&ctx, board_cmd.action).await,
        Commands::List(list_cmd) => handlers::list::handle(&ctx, list_cmd.action).await,
        Commands::Card(card_cmd) => handlers::card::handle(&ctx, card_cmd.action).await,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "kanban", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!("Command failed: {:#}", e);
        output::output_error(&e.to_string());
    }

    Ok(())
}
