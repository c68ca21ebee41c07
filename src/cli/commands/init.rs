use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::oplog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the local SQLite database and its migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.init_all(cli.test)?;

    let db_path = cfg.database_path();

    println!("⚙️  Initializing rSurvey…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path.display());
    println!("🌐 Backend    : {}", cfg.api_url);

    let pool = DbPool::open_initialized(&db_path)?;
    oplog_quiet(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", db_path.display()),
    );

    success("rSurvey initialization completed!");
    Ok(())
}
