//! Time utilities: parsing HH:MM, formatting minute totals, etc.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// `Xh MMm`; zero and negative totals render as `0h 0m`.
pub fn format_minutes(mins: i64) -> String {
    if mins <= 0 {
        return "0h 0m".to_string();
    }
    format!("{}h {:02}m", mins / 60, mins % 60)
}

/// `HH:MM` for an optional time, `—` when absent.
pub fn format_hm(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "—".to_string())
}
