use crate::models::session::AttendanceSession;
use crate::utils::colors::{color_for_status, colorize_optional, paint};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_hm, format_minutes};

/// One history row, already formatted for display or export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub date: String,
    pub weekday: String,
    pub check_in: String,
    pub check_out: String,
    pub hours: String,
    pub break_time: String,
    pub status: String,
}

impl HistoryRow {
    pub fn from_session(s: &AttendanceSession) -> Self {
        let day = s.day();
        let closed = s.check_in.is_some() && s.check_out.is_some();
        let break_mins = s.break_total_minutes();

        Self {
            date: day
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "—".into()),
            weekday: day
                .map(|d| d.format("%a").to_string())
                .unwrap_or_default(),
            check_in: format_hm(s.check_in.as_ref().and_then(|t| t.local_time())),
            check_out: format_hm(s.check_out.as_ref().and_then(|t| t.local_time())),
            // Hours only mean something once the day is closed.
            hours: if closed {
                format_minutes(s.worked_minutes())
            } else {
                "—".into()
            },
            break_time: if closed && break_mins > 0 {
                format_minutes(break_mins)
            } else {
                "—".into()
            },
            status: s.status.clone().unwrap_or_else(|| "—".into()),
        }
    }
}

pub fn render_history(records: &[AttendanceSession], color: bool) -> String {
    let mut table = Table::new(
        ["Date", "Day", "Check In", "Check Out", "Hours", "Break", "Status"]
            .into_iter()
            .map(Column::new)
            .collect(),
    );

    for r in records.iter().map(HistoryRow::from_session) {
        let cells = vec![
            r.date,
            r.weekday,
            r.check_in,
            r.check_out,
            r.hours,
            r.break_time,
            r.status,
        ];
        let cells = if color {
            let status = cells[6].clone();
            let mut colored: Vec<String> = cells[..6].iter().map(|c| colorize_optional(c)).collect();
            colored.push(if status == "—" {
                colorize_optional(&status)
            } else {
                paint(color_for_status(&status), &status)
            });
            colored
        } else {
            cells
        };
        table.add_row(cells);
    }

    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(v: serde_json::Value) -> AttendanceSession {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn closed_day_shows_hours_and_break() {
        let r = HistoryRow::from_session(&rec(json!({
            "date": "2025-06-02",
            "checkIn": "2025-06-02T09:00:00",
            "checkOut": "2025-06-02T17:30:00",
            "totalWorkHours": 7.75,
            "totalBreakMinutes": 45,
            "status": "PRESENT"
        })));
        assert_eq!(r.date, "2025-06-02");
        assert_eq!(r.weekday, "Mon");
        assert_eq!(r.check_in, "09:00");
        assert_eq!(r.check_out, "17:30");
        assert_eq!(r.hours, "7h 45m");
        assert_eq!(r.break_time, "0h 45m");
        assert_eq!(r.status, "PRESENT");
    }

    #[test]
    fn open_day_has_no_hours() {
        let r = HistoryRow::from_session(&rec(json!({
            "checkIn": "2025-06-03T09:10:00",
            "totalWorkHours": 2.0
        })));
        assert_eq!(r.date, "2025-06-03");
        assert_eq!(r.check_out, "—");
        assert_eq!(r.hours, "—");
        assert_eq!(r.break_time, "—");
        assert_eq!(r.status, "—");
    }

    #[test]
    fn plain_table_lists_every_record() {
        let out = render_history(
            &[
                rec(json!({ "date": "2025-06-02", "checkIn": "09:00", "checkOut": "17:00" })),
                rec(json!({ "date": "2025-06-03" })),
            ],
            false,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Date"));
        assert!(lines[2].starts_with("2025-06-02  Mon"));
        assert!(lines[3].starts_with("2025-06-03  Tue"));
    }
}
