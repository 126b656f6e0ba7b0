use super::phase::{DerivedState, Phase};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw timestamp string as sent by the backend.
///
/// Only presence drives the attendance phase; parsing is needed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timestamp(String);

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

impl Timestamp {
    /// Blank strings count as absent.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local date-time of the timestamp, when it carries a date.
    /// Offsets are converted to the local zone; naive values are taken as local.
    pub fn local_datetime(&self) -> Option<NaiveDateTime> {
        let s = self.0.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Local).naive_local());
        }

        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    }

    /// Local wall-clock time; also accepts bare `HH:MM[:SS]`.
    pub fn local_time(&self) -> Option<NaiveTime> {
        if let Some(dt) = self.local_datetime() {
            return Some(dt.time());
        }
        let s = self.0.trim();
        NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .ok()
    }

    pub fn local_date(&self) -> Option<NaiveDate> {
        if let Some(dt) = self.local_datetime() {
            return Some(dt.date());
        }
        NaiveDate::parse_from_str(self.0.trim(), "%Y-%m-%d").ok()
    }
}

/// Accept strings, numbers and nulls; empty strings and `false` are absent.
fn loose_string(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn de_timestamp<'de, D>(d: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(d)?;
    Ok(loose_string(raw).and_then(Timestamp::new))
}

fn de_loose_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(d)?;
    Ok(loose_string(raw))
}

fn de_number<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(d)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// One day's attendance record for the logged-in employee.
///
/// Owned by the server: the client never builds or edits one, it only reads
/// the latest copy after every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSession {
    #[serde(default, deserialize_with = "de_loose_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de_loose_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "de_timestamp")]
    pub check_in: Option<Timestamp>,
    #[serde(default, deserialize_with = "de_timestamp")]
    pub check_out: Option<Timestamp>,
    #[serde(default, deserialize_with = "de_timestamp")]
    pub break_start_time: Option<Timestamp>,
    #[serde(default, deserialize_with = "de_timestamp")]
    pub break_end_time: Option<Timestamp>,
    #[serde(default, deserialize_with = "de_number")]
    pub total_work_hours: Option<f64>,
    #[serde(default, deserialize_with = "de_number")]
    pub total_break_minutes: Option<f64>,
    /// Older backend builds report the break total under this name.
    #[serde(default, deserialize_with = "de_number")]
    pub break_minutes: Option<f64>,
    #[serde(default, deserialize_with = "de_loose_string")]
    pub status: Option<String>,
}

impl AttendanceSession {
    pub fn derived(&self) -> DerivedState {
        DerivedState::of(self)
    }

    pub fn phase(&self) -> Phase {
        self.derived().phase()
    }

    /// Checked in and not yet closed.
    pub fn is_open(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_none()
    }

    /// Server-computed worked time, rounded to whole minutes.
    pub fn worked_minutes(&self) -> i64 {
        (self.total_work_hours.unwrap_or(0.0) * 60.0).round() as i64
    }

    pub fn break_total_minutes(&self) -> i64 {
        let total = match self.total_break_minutes {
            Some(m) if m != 0.0 => m,
            _ => self.break_minutes.unwrap_or(0.0),
        };
        total.round() as i64
    }

    /// Day the record belongs to: explicit `date`, else the check-in day.
    pub fn day(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(Timestamp::new)
            .and_then(|t| t.local_date())
            .or_else(|| self.check_in.as_ref().and_then(Timestamp::local_date))
    }
}
