use crate::cli::ListAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: ListAction) -> anyhow::Result<()> {
    match action {
        ListAction::Create { board_id, title } => {
            let view = ctx.open_board(board_id).await?;
            let list = view.create_list(&title).await?;
            output::output_success(&list);
        }
        ListAction::Rename {
            board_id,
            id,
            title,
        } => {
            let view = ctx.open_board(board_id).await?;
            let outcome = view.rename_list(id, &title).await?;
            output::output_sync(id, outcome);
        }
        ListAction::Delete { board_id, id } => {
            let view = ctx.open_board(board_id).await?;
            let outcome = view.delete_list(id).await?;
            output::output_sync(id, outcome);
        }
    }
    Ok(())
}
