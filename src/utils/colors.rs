//! ANSI color helper utilities for terminal output.

use crate::models::phase::{ButtonStyle, Phase};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const ORANGE: &str = "\x1b[38;5;208m";

pub fn color_for_phase(phase: Phase) -> &'static str {
    match phase {
        Phase::NotCheckedIn => CYAN,
        Phase::Working => ORANGE,
        Phase::OnBreak => YELLOW,
        Phase::Completed => GREY,
    }
}

pub fn color_for_button(style: ButtonStyle) -> &'static str {
    match style {
        ButtonStyle::Primary => CYAN,
        ButtonStyle::Warning => ORANGE,
        ButtonStyle::Resume => GREEN,
        ButtonStyle::Muted => GREY,
    }
}

/// Attendance status badge color, as used in the history table.
pub fn color_for_status(status: &str) -> &'static str {
    match status.to_ascii_uppercase().as_str() {
        "PRESENT" | "COMPLETED" => GREEN,
        "LATE" | "HALF_DAY" | "ON_BREAK" => YELLOW,
        "ABSENT" => RED,
        _ => GREY,
    }
}

/// Grey out placeholders ("—", "0h 0m", empty), leave real values alone.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "—" || v == "0h 0m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
