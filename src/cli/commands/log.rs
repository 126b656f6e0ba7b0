use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Log {
        print: true,
        operation,
    } = cmd
    {
        let pool = DbPool::new(&ctx.cfg.database)?;
        LogLogic::print_log(&pool, operation.as_deref())?;
    }

    Ok(())
}
