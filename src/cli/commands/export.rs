use super::backlog::filter_from_args;
use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::backlog::BacklogLogic;
use crate::db::log::oplog_quiet;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub async fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let filter = filter_from_args(filter)?;
        let size = ctx.page_size(None)?;

        let api = ctx.api()?;
        let mut view = BacklogLogic::open(&api, ctx.session.as_ref(), size).await?;
        view.set_filter(filter);

        let exported = ExportLogic::export(&view, *format, file, *force, &ctx.cfg.export_title)?;
        if exported > 0 {
            oplog_quiet(
                &ctx.pool.conn,
                "export",
                format.as_str(),
                &format!("{exported} tickets to {file}"),
            );
        }
    }
    Ok(())
}
