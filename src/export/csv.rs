use crate::errors::AppResult;
use crate::models::session::{AttendanceSession, Timestamp};
use std::path::Path;

fn raw(t: &Option<Timestamp>) -> String {
    t.as_ref().map(|t| t.as_str().to_string()).unwrap_or_default()
}

/// Scrive i record di presenza in CSV nel file indicato.
pub fn write_csv(path: &Path, records: &[AttendanceSession]) -> AppResult<()> {
    let mut wtr = ::csv::Writer::from_path(path)?;

    wtr.write_record([
        "date",
        "check_in",
        "check_out",
        "break_start",
        "break_end",
        "worked_minutes",
        "break_minutes",
        "status",
    ])?;

    for r in records {
        wtr.write_record(&[
            r.day().map(|d| d.to_string()).unwrap_or_default(),
            raw(&r.check_in),
            raw(&r.check_out),
            raw(&r.break_start_time),
            raw(&r.break_end_time),
            r.worked_minutes().to_string(),
            r.break_total_minutes().to_string(),
            r.status.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
