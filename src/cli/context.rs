use crate::api::HttpApi;
use crate::config::{Config, CredentialStore};
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::errors::AppResult;
use chrono::NaiveTime;
use std::io::IsTerminal;

/// Everything a command needs, built once per invocation.
pub struct Context {
    pub cfg: Config,
    pub creds: CredentialStore,
    /// Pinned click time from `--at`.
    pub at: Option<NaiveTime>,
    pub test: bool,
}

impl Context {
    pub fn api(&self) -> AppResult<HttpApi<'_>> {
        HttpApi::new(&self.cfg, &self.creds)
    }

    pub fn clock(&self) -> Box<dyn Clock> {
        match self.at {
            Some(t) => Box::new(FixedClock::today_at(t)),
            None => Box::new(SystemClock),
        }
    }

    pub fn color(&self) -> bool {
        std::io::stdout().is_terminal()
    }
}
