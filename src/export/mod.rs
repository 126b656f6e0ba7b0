// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;

use crate::errors::AppResult;
use crate::models::session::AttendanceSession;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub use self::csv::write_csv;
pub use self::json::write_json;
pub(crate) use fs_utils::ensure_writable;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write attendance records to `path` in the requested format.
pub fn export_records(
    records: &[AttendanceSession],
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => write_csv(path, records)?,
        ExportFormat::Json => write_json(path, records)?,
    }

    success(format!(
        "{} export completed: {} ({} records)",
        format.as_str().to_uppercase(),
        path.display(),
        records.len()
    ));
    Ok(())
}
