use super::session::AttendanceSession;
use serde::Deserialize;

/// Body of `GET /attendance/today`.
///
/// The endpoint has answered with a single record, a list of records, or
/// `null` depending on the backend build. Decode all of them here and hand
/// the rest of the crate one optional record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TodayPayload {
    Many(Vec<AttendanceSession>),
    One(AttendanceSession),
    Nothing(()),
}

impl TodayPayload {
    /// Pick the record that drives the UI: the open one if any, else the last.
    pub fn into_active(self) -> Option<AttendanceSession> {
        match self {
            TodayPayload::One(s) => Some(s),
            TodayPayload::Nothing(()) => None,
            TodayPayload::Many(mut sessions) => {
                match sessions.iter().position(AttendanceSession::is_open) {
                    Some(idx) => Some(sessions.swap_remove(idx)),
                    None => sessions.pop(),
                }
            }
        }
    }
}

/// Body of `GET /attendance/monthly`: either a bare list or `{attendances: [...]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MonthlyPayload {
    List(Vec<AttendanceSession>),
    Wrapped { attendances: Vec<AttendanceSession> },
    Nothing(()),
}

impl MonthlyPayload {
    pub fn into_records(self) -> Vec<AttendanceSession> {
        match self {
            MonthlyPayload::List(v) | MonthlyPayload::Wrapped { attendances: v } => v,
            MonthlyPayload::Nothing(()) => Vec::new(),
        }
    }
}

/// Body of `POST /attendance/checkin`: the record, possibly under `attendance`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CheckInPayload {
    Wrapped { attendance: AttendanceSession },
    Bare(AttendanceSession),
}

impl CheckInPayload {
    pub fn into_session(self) -> AttendanceSession {
        match self {
            CheckInPayload::Wrapped { attendance } => attendance,
            CheckInPayload::Bare(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::phase::Phase;
    use serde_json::json;

    fn today(v: serde_json::Value) -> Option<AttendanceSession> {
        serde_json::from_value::<TodayPayload>(v).unwrap().into_active()
    }

    #[test]
    fn single_object_is_taken_as_is() {
        let s = today(json!({ "checkIn": "2025-06-02T09:00:00" })).unwrap();
        assert_eq!(s.phase(), Phase::Working);
    }

    #[test]
    fn empty_object_means_not_checked_in() {
        let s = today(json!({})).unwrap();
        assert_eq!(s.phase(), Phase::NotCheckedIn);
    }

    #[test]
    fn null_and_empty_list_mean_no_record() {
        assert!(today(json!(null)).is_none());
        assert!(today(json!([])).is_none());
    }

    #[test]
    fn list_prefers_the_open_record() {
        let s = today(json!([
            { "id": "a", "checkIn": "08:00", "checkOut": "10:00" },
            { "id": "b", "checkIn": "11:00" },
            { "id": "c", "checkIn": "12:00", "checkOut": "12:30" }
        ]))
        .unwrap();
        assert_eq!(s.id.as_deref(), Some("b"));
    }

    #[test]
    fn list_without_open_record_falls_back_to_last() {
        let s = today(json!([
            { "id": "a", "checkIn": "08:00", "checkOut": "10:00" },
            { "id": "c", "checkIn": "12:00", "checkOut": "12:30" }
        ]))
        .unwrap();
        assert_eq!(s.id.as_deref(), Some("c"));
        assert_eq!(s.phase(), Phase::Completed);
    }

    #[test]
    fn monthly_accepts_both_shapes() {
        let wrapped: MonthlyPayload =
            serde_json::from_value(json!({ "attendances": [{ "id": 1 }, { "id": 2 }] })).unwrap();
        assert_eq!(wrapped.into_records().len(), 2);

        let bare: MonthlyPayload = serde_json::from_value(json!([{ "id": 1 }])).unwrap();
        assert_eq!(bare.into_records().len(), 1);
    }

    #[test]
    fn check_in_receipt_unwraps_attendance() {
        let p: CheckInPayload = serde_json::from_value(json!({
            "message": "ok",
            "attendance": { "checkIn": "2025-06-02T09:01:00" }
        }))
        .unwrap();
        assert!(p.into_session().check_in.is_some());

        let p: CheckInPayload =
            serde_json::from_value(json!({ "checkIn": "2025-06-02T09:01:00" })).unwrap();
        assert!(p.into_session().check_in.is_some());
    }
}
