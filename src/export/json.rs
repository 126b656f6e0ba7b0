use crate::errors::AppResult;
use crate::models::session::AttendanceSession;
use std::path::Path;

/// Scrive i record in JSON formattato.
pub fn write_json(path: &Path, records: &[AttendanceSession]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}
