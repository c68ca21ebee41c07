use crate::backlog::Filter;
use crate::cli::context::AppContext;
use crate::cli::parser::{Commands, FilterArgs};
use crate::core::backlog::BacklogLogic;
use crate::errors::AppResult;

pub(crate) fn filter_from_args(args: &FilterArgs) -> AppResult<Filter> {
    Filter::from_args(args.attendant, args.from.as_deref(), args.to.as_deref())
}

pub async fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Backlog {
        filter,
        page,
        page_size,
        users,
    } = cmd
    {
        let filter = filter_from_args(filter)?;
        let size = ctx.page_size(*page_size)?;

        let api = ctx.api()?;
        let mut view = BacklogLogic::open(&api, ctx.session.as_ref(), size).await?;

        if *users {
            print!("{}", BacklogLogic::render_users(&view));
            return Ok(());
        }

        view.set_filter(filter);
        view.go_to_page(*page);
        print!("{}", BacklogLogic::render_page(&view));
    }
    Ok(())
}
