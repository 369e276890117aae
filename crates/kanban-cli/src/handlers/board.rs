use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::List => {
            let dashboard = ctx.dashboard().await?;
            output::output_list(dashboard.boards().to_vec());
        }
        BoardAction::Create { title } => {
            let mut dashboard = ctx.dashboard().await?;
            let board = dashboard.create_board(&title).await?;
            output::output_success(&board);
        }
        BoardAction::Rename { id, title } => {
            let mut dashboard = ctx.dashboard().await?;
            let outcome = dashboard.rename_board(id, &title).await?;
            output::output_sync(id, outcome);
        }
        BoardAction::Delete { id } => {
            let mut dashboard = ctx.dashboard().await?;
            let outcome = dashboard.delete_board(id).await?;
            output::output_sync(id, outcome);
        }
        BoardAction::Show { id } => {
            let view = ctx.open_board(id).await?;
            match view.store().snapshot() {
                Some(board) => output::output_success(&board),
                None => output::output_error(&format!("Board not found: {}", id)),
            }
        }
    }
    Ok(())
}
