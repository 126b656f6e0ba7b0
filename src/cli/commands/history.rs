use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::history::HistoryLogic;
use crate::export::export_records;
use crate::errors::AppResult;
use crate::ui::history::render_history;
use crate::ui::messages;
use crate::utils::date::{current_month, month_label, parse_month};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let Commands::History {
        month,
        file,
        format,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let (year, month) = match month {
        Some(m) => parse_month(m)?,
        None => current_month(),
    };

    let api = ctx.api()?;
    let records = HistoryLogic::load(&api, year, month)?;

    if let Some(file) = file {
        return export_records(&records, *format, &expand_tilde(file), *force);
    }

    messages::header(format!("Attendance history: {}", month_label(year, month)));
    if records.is_empty() {
        messages::info("No attendance records for this month");
        return Ok(());
    }
    println!("{}", render_history(&records, ctx.color()));
    Ok(())
}
