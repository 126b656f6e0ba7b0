use super::error_body::error_detail;
use super::{AttendanceApi, AuthApi};
use crate::config::{Config, CredentialStore};
use crate::errors::{AppError, AppResult};
use crate::models::checkout::CheckoutRequest;
use crate::models::session::AttendanceSession;
use crate::models::today::{CheckInPayload, MonthlyPayload, TodayPayload};
use crate::models::user::{AuthUser, LoginRequest, LoginResponse};
use crate::ui::messages::warning;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use std::time::Duration;

/// Blocking REST client for the HR backend.
///
/// Attaches the bearer token from the credential store to every request and
/// clears the store when the backend answers 401.
pub struct HttpApi<'a> {
    client: Client,
    cfg: &'a Config,
    creds: &'a CredentialStore,
}

impl<'a> HttpApi<'a> {
    pub fn new(cfg: &'a Config, creds: &'a CredentialStore) -> AppResult<Self> {
        // Requests run to completion; there is no client-side timeout.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .user_agent(concat!("wfclock/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, cfg, creds })
    }

    fn send(&self, req: RequestBuilder) -> AppResult<Response> {
        let req = match self.creds.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req.send()?;
        let status = resp.status();
        tracing::debug!(url = %resp.url(), status = status.as_u16(), "backend response");

        if status == StatusCode::UNAUTHORIZED {
            let detail = error_detail(&resp.text().unwrap_or_default());
            if self.creds.is_logged_in() {
                self.creds.clear()?;
                warning("Session expired: local credentials cleared. Run `wfclock login` again.");
            }
            return Err(AppError::Unauthorized(detail));
        }

        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                message: error_detail(&body),
            });
        }

        Ok(resp)
    }

    /// Body text of a successful response; blank bodies become `None`.
    fn body(resp: Response) -> AppResult<Option<String>> {
        let text = resp.text()?;
        Ok(if text.trim().is_empty() {
            None
        } else {
            Some(text)
        })
    }
}

impl AttendanceApi for HttpApi<'_> {
    fn today(&self) -> AppResult<Option<AttendanceSession>> {
        let url = self.cfg.attendance_url("today");
        let resp = self.send(self.client.get(&url))?;

        match Self::body(resp)? {
            None => Ok(None),
            Some(text) => {
                let payload: TodayPayload = serde_json::from_str(&text)?;
                Ok(payload.into_active())
            }
        }
    }

    fn check_in(&self) -> AppResult<Option<AttendanceSession>> {
        let url = self.cfg.attendance_url("checkin");
        let resp = self.send(self.client.post(&url))?;

        // The write already happened; an odd receipt must not turn it into a failure.
        let session = Self::body(resp)?.and_then(|text| {
            serde_json::from_str::<CheckInPayload>(&text)
                .map(CheckInPayload::into_session)
                .map_err(|e| tracing::debug!(error = %e, "unrecognized check-in receipt"))
                .ok()
        });
        Ok(session)
    }

    fn check_out(&self, body: Option<CheckoutRequest>) -> AppResult<()> {
        let url = self.cfg.attendance_url("checkout");
        let req = match body {
            Some(b) => self.client.post(&url).json(&b),
            None => self.client.post(&url),
        };
        self.send(req)?;
        Ok(())
    }

    fn monthly(&self, year: i32, month: u32) -> AppResult<Vec<AttendanceSession>> {
        let url = self.cfg.attendance_url("monthly");
        let req = self
            .client
            .get(&url)
            .query(&[("month", month.to_string()), ("year", year.to_string())]);
        let resp = self.send(req)?;

        match Self::body(resp)? {
            None => Ok(Vec::new()),
            Some(text) => {
                let payload: MonthlyPayload = serde_json::from_str(&text)?;
                Ok(payload.into_records())
            }
        }
    }
}

impl AuthApi for HttpApi<'_> {
    fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        let url = self.cfg.api_url("auth/login");
        let resp = self.send(
            self.client
                .post(&url)
                .json(&LoginRequest { username, password }),
        )?;
        Ok(resp.json()?)
    }

    fn logout(&self) -> AppResult<()> {
        let url = self.cfg.api_url("auth/logout");
        self.send(self.client.post(&url))?;
        Ok(())
    }

    fn me(&self) -> AppResult<AuthUser> {
        let url = self.cfg.api_url("auth/me");
        let resp = self.send(self.client.get(&url))?;
        Ok(resp.json()?)
    }
}
