use crate::api::AttendanceApi;
use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::clock::Clock;
use crate::core::controller::{AttendanceController, Notice, Outcome};
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::ui::tracking_box::BoxView;
use chrono::Local;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

fn view<'a, A: AttendanceApi, C: Clock>(
    ctrl: &'a AttendanceController<A, C>,
    ctx: &'a Context,
) -> BoxView<'a> {
    BoxView {
        now: Local::now().naive_local(),
        session: ctrl.session(),
        button: ctrl.button(),
        time_format: &ctx.cfg.time_format,
        color: ctx.color(),
    }
}

/// Show the notice, record the action, turn a refusal into an error.
fn report(ctx: &Context, outcome: &Outcome) -> AppResult<()> {
    if let Some(action) = outcome.action {
        let target = if outcome.succeeded() { "ok" } else { "failed" };
        audit(&ctx.cfg.database, action.as_str(), target, outcome.notice.text());
    }

    match &outcome.notice {
        Notice::Blocking(msg) => Err(AppError::Rejected(msg.clone())),
        Notice::Transient(_) => {
            messages::notice(&outcome.notice);
            Ok(())
        }
    }
}

/// Handle `status`, `checkin`, `checkout`, `press` and `watch`.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let api = ctx.api()?;
    let mut ctrl =
        AttendanceController::new(api, ctx.clock()).with_time_format(&ctx.cfg.time_format);
    ctrl.refresh();

    let outcome = match cmd {
        Commands::Checkin => Some(ctrl.check_in()),
        Commands::Checkout => Some(ctrl.check_out()),
        Commands::Press => Some(ctrl.press()),
        Commands::Watch { ticks } => return watch(&ctrl, ctx, *ticks),
        _ => None,
    };

    if let Some(outcome) = &outcome {
        report(ctx, outcome)?;
        println!();
    }

    println!("{}", view(&ctrl, ctx).render());
    Ok(())
}

/// Print the box once, then keep the clock line ticking every second.
/// No backend calls happen while ticking.
fn watch<A: AttendanceApi, C: Clock>(
    ctrl: &AttendanceController<A, C>,
    ctx: &Context,
    ticks: Option<u64>,
) -> AppResult<()> {
    println!("{}", view(ctrl, ctx).render());

    let mut elapsed = 0u64;
    loop {
        let line = view(ctrl, ctx).clock_line();
        print!("\r{line}");
        io::stdout().flush()?;

        if ticks.is_some_and(|max| elapsed >= max) {
            println!();
            return Ok(());
        }
        thread::sleep(Duration::from_secs(1));
        elapsed += 1;
    }
}
