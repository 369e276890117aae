use crate::cli::AuthArgs;
use crate::context::CliContext;
use crate::output;
use kanban_client::auth;

pub async fn login(ctx: &CliContext, args: AuthArgs) -> anyhow::Result<()> {
    let api = ctx.anonymous_api()?;
    let session = auth::login(&api, &args.email, &args.password).await?;
    output::output_success(&session);
    Ok(())
}

pub async fn register(ctx: &CliContext, args: AuthArgs) -> anyhow::Result<()> {
    let api = ctx.anonymous_api()?;
    let session = auth::register(&api, &args.email, &args.password).await?;
    output::output_success(&session);
    Ok(())
}
