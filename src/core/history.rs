use crate::api::AttendanceApi;
use crate::errors::AppResult;
use crate::models::session::AttendanceSession;

pub struct HistoryLogic;

impl HistoryLogic {
    /// Fetch a month of records, oldest day first. Records without a
    /// recognizable day keep their server order at the end.
    pub fn load<A: AttendanceApi>(
        api: &A,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<AttendanceSession>> {
        let mut records = api.monthly(year, month)?;
        records.sort_by_key(|r| (r.day().is_none(), r.day()));
        tracing::debug!(year, month, count = records.len(), "loaded attendance history");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeApi};
    use serde_json::json;

    fn rec(v: serde_json::Value) -> AttendanceSession {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn records_are_sorted_by_day() {
        let api = FakeApi::with_month(vec![
            rec(json!({ "id": "x" })),
            rec(json!({ "id": "c", "date": "2025-06-10" })),
            rec(json!({ "id": "a", "checkIn": "2025-06-02T09:00:00" })),
        ]);

        let ids: Vec<String> = HistoryLogic::load(&api, 2025, 6)
            .unwrap()
            .into_iter()
            .filter_map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["a", "c", "x"]);
        assert_eq!(api.calls(), vec![Call::Monthly(2025, 6)]);
    }

    #[test]
    fn history_errors_are_reported() {
        let api = FakeApi::empty();
        api.fail_reads(true);
        let err = HistoryLogic::load(&api, 2025, 6).unwrap_err();
        assert_eq!(err.server_message(), Some("Service unavailable"));
    }
}
