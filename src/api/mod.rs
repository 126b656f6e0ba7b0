//! Backend calls used by the attendance workflow.
//!
//! Payload shapes are owned by the server; everything returned from here is
//! already normalized, so callers never branch on the wire format.

pub mod error_body;
#[cfg(test)]
pub(crate) mod fake;
pub mod http;

pub use http::HttpApi;

use crate::errors::AppResult;
use crate::models::checkout::CheckoutRequest;
use crate::models::session::AttendanceSession;
use crate::models::user::{AuthUser, LoginResponse};

pub trait AttendanceApi {
    /// `GET …/today`, reduced to the record that drives the UI.
    fn today(&self) -> AppResult<Option<AttendanceSession>>;

    /// `POST …/checkin` without a body. Returns the record when the server
    /// sent one back.
    fn check_in(&self) -> AppResult<Option<AttendanceSession>>;

    /// `POST …/checkout`; `None` sends no body (resume from break).
    fn check_out(&self, body: Option<CheckoutRequest>) -> AppResult<()>;

    /// `GET …/monthly?month=M&year=Y`.
    fn monthly(&self, year: i32, month: u32) -> AppResult<Vec<AttendanceSession>>;
}

pub trait AuthApi {
    fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse>;
    fn logout(&self) -> AppResult<()>;
    fn me(&self) -> AppResult<AuthUser>;
}
