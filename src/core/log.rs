use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// Color of the operation word in the printed log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "checkout" => Colour::Red,
        "lunch_break" => Colour::Yellow,
        "resume" => Colour::Cyan,
        "login" | "logout" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

/// One printable line; the operation word is colored, the rest is plain.
fn format_line(e: &LogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
    let visible = op_target(e);
    let truncated = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    let color = color_for_operation(&e.operation);
    let colored = match truncated.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(truncated.as_str()).to_string(),
    };
    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        e.id,
        e.date,
        colored,
        padding,
        e.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn lines(pool: &DbPool, operation: Option<&str>) -> AppResult<Vec<String>> {
        let entries = load_entries(&pool.conn, operation)?;

        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        Ok(entries
            .iter()
            .map(|e| format_line(e, id_w, date_w, op_w))
            .collect())
    }

    pub fn print_log(pool: &DbPool, operation: Option<&str>) -> AppResult<()> {
        let lines = Self::lines(pool, operation)?;

        println!("📜 Internal log:\n");
        if lines.is_empty() {
            println!("(empty)");
        }
        for l in lines {
            println!("{l}");
        }
        Ok(())
    }
}
