use crate::cli::{CardAction, CardMoveArgs, CardUpdateArgs};
use crate::context::CliContext;
use crate::output;
use kanban_client::{DropOutcome, SyncOutcome};
use kanban_domain::{CardUpdate, FieldUpdate};

pub async fn handle(ctx: &CliContext, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::Create {
            board_id,
            list_id,
            title,
        } => {
            let view = ctx.open_board(board_id).await?;
            let card = view.create_card(list_id, &title).await?;
            output::output_success(&card);
        }
        CardAction::Update(args) => {
            let view = ctx.open_board(args.board_id).await?;
            let card = view.update_card(args.id, &build_card_update(&args)).await?;
            output::output_success(&card);
        }
        CardAction::Delete { board_id, id } => {
            let view = ctx.open_board(board_id).await?;
            let outcome = view.delete_card(id).await?;
            output::output_sync(id, outcome);
        }
        CardAction::Move(args) => handle_move(ctx, args).await?,
    }
    Ok(())
}

fn build_card_update(args: &CardUpdateArgs) -> CardUpdate {
    CardUpdate {
        title: args.title.clone(),
        description: FieldUpdate::from_flags(args.description.clone(), args.clear_description),
    }
}

/// One complete drag session: pick up, drop, wait for the server
async fn handle_move(ctx: &CliContext, args: CardMoveArgs) -> anyhow::Result<()> {
    let target = args
        .target()
        .ok_or_else(|| anyhow::anyhow!("--to-list or --before-card is required"))?;

    let view = ctx.open_board(args.board_id).await?;
    let mut drag = view.drag_controller();
    if !drag.start(args.id) {
        return output::output_error(&format!("Card not found: {}", args.id));
    }

    match drag.drop(Some(target)) {
        DropOutcome::Moved { payload, sync } => {
            if let SyncOutcome::Failed(message) = sync.await {
                return output::output_error(&message);
            }
            output::output_success(&payload);
        }
        DropOutcome::Unchanged => output::output_sync(args.id, SyncOutcome::Unchanged),
        DropOutcome::Aborted | DropOutcome::Ignored => {
            return output::output_error("Drop target not found on this board");
        }
    }
    Ok(())
}
