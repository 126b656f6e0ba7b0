//! In-memory backend used by unit tests.

use super::AttendanceApi;
use crate::errors::{AppError, AppResult};
use crate::models::checkout::{CheckoutRequest, CheckoutType};
use crate::models::session::{AttendanceSession, Timestamp};
use std::cell::{Cell, RefCell};
use std::io;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Today,
    CheckIn,
    CheckOut(Option<CheckoutRequest>),
    Monthly(i32, u32),
}

#[derive(Clone, Copy)]
enum WriteFailure {
    Status(u16, Option<&'static str>),
    Offline,
}

/// Behaves like a well-formed server: writes mutate its record the way the
/// backend does, so the next `today()` reflects them.
#[derive(Default)]
pub struct FakeApi {
    record: RefCell<Option<AttendanceSession>>,
    month: RefCell<Vec<AttendanceSession>>,
    calls: RefCell<Vec<Call>>,
    fail_reads: Cell<bool>,
    write_failure: Cell<Option<WriteFailure>>,
    check_in_stamp: RefCell<Option<String>>,
}

impl FakeApi {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_today_json(v: serde_json::Value) -> Self {
        let api = Self::default();
        *api.record.borrow_mut() = Some(serde_json::from_value(v).unwrap());
        api
    }

    pub fn with_month(records: Vec<AttendanceSession>) -> Self {
        let api = Self::default();
        *api.month.borrow_mut() = records;
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn reject_writes(&self, status: u16, message: Option<&'static str>) {
        self.write_failure
            .set(Some(WriteFailure::Status(status, message)));
    }

    pub fn fail_writes_offline(&self) {
        self.write_failure.set(Some(WriteFailure::Offline));
    }

    pub fn set_check_in_stamp(&self, raw: &str) {
        *self.check_in_stamp.borrow_mut() = Some(raw.to_string());
    }

    fn write_error(&self) -> Option<AppError> {
        self.write_failure.get().map(|f| match f {
            WriteFailure::Status(status, message) => AppError::Api {
                status,
                message: message.map(str::to_string),
            },
            WriteFailure::Offline => AppError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
        })
    }

    fn stamp(&self, fallback: &str) -> Option<Timestamp> {
        let raw = self
            .check_in_stamp
            .borrow()
            .clone()
            .unwrap_or_else(|| fallback.to_string());
        Timestamp::new(raw)
    }
}

impl AttendanceApi for FakeApi {
    fn today(&self) -> AppResult<Option<AttendanceSession>> {
        self.calls.borrow_mut().push(Call::Today);
        if self.fail_reads.get() {
            return Err(AppError::Api {
                status: 503,
                message: None,
            });
        }
        Ok(self.record.borrow().clone())
    }

    fn check_in(&self) -> AppResult<Option<AttendanceSession>> {
        self.calls.borrow_mut().push(Call::CheckIn);
        if let Some(e) = self.write_error() {
            return Err(e);
        }
        let session = AttendanceSession {
            check_in: self.stamp("2025-06-02T09:00:00"),
            ..Default::default()
        };
        *self.record.borrow_mut() = Some(session.clone());
        Ok(self
            .check_in_stamp
            .borrow()
            .as_ref()
            .map(|_| session))
    }

    fn check_out(&self, body: Option<CheckoutRequest>) -> AppResult<()> {
        self.calls.borrow_mut().push(Call::CheckOut(body));
        if let Some(e) = self.write_error() {
            return Err(e);
        }

        let mut record = self.record.borrow_mut();
        let s = record.get_or_insert_with(AttendanceSession::default);
        match body {
            None => s.break_end_time = Timestamp::new("13:45"),
            Some(r) if r.checkout_type == CheckoutType::Break => {
                s.break_start_time = Timestamp::new("13:00");
                s.break_end_time = None;
            }
            Some(_) => s.check_out = Timestamp::new("17:30"),
        }
        Ok(())
    }

    fn monthly(&self, year: i32, month: u32) -> AppResult<Vec<AttendanceSession>> {
        self.calls.borrow_mut().push(Call::Monthly(year, month));
        if self.fail_reads.get() {
            return Err(AppError::Api {
                status: 503,
                message: Some("Service unavailable".into()),
            });
        }
        Ok(self.month.borrow().clone())
    }
}
