use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::guard::{Route, navigate};
use crate::ui::messages::{info, warning};

/// Resolve a route through the guard and report where navigation lands.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Open { path } = cmd {
        let requested = Route::parse(path)?;
        let landed = navigate(ctx.session.as_ref(), requested);

        if landed == requested {
            info(format!("Rendering {landed}"));
        } else {
            warning(format!("Redirected from {requested} to {landed}"));
        }
        println!("{landed}");
    }
    Ok(())
}
