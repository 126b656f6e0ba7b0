use crate::cli::context::Context;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// Creates the config directory, writes the configuration file (skipped in
/// test mode) and prepares the audit database with all pending migrations.
pub fn handle(ctx: &Context) -> AppResult<()> {
    messages::header("Initializing wfclock");

    ctx.cfg.init_all(ctx.test)?;

    let pool = DbPool::new(&ctx.cfg.database)?;
    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", ctx.cfg.database),
    ) {
        messages::warning(format!("Failed to write internal log: {e}"));
    }

    messages::success("wfclock initialization completed");
    Ok(())
}
