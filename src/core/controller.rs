//! Attendance session controller.
//!
//! Derives the user's phase from the server's "today" record and turns one
//! button press into the matching backend call. The phase is never changed
//! locally: every successful write is followed by a fresh read.

use super::clock::Clock;
use super::lunch::{CheckoutKind, classify_checkout};
use crate::api::AttendanceApi;
use crate::errors::AppError;
use crate::models::phase::{ActionButton, DerivedState, LABEL_PROCESSING, Phase};
use crate::models::session::{AttendanceSession, Timestamp};
use chrono::NaiveTime;

pub const CHECK_IN_FAILED: &str = "Check-in failed";
pub const CHECK_OUT_FAILED: &str = "Check-out failed";
pub const ALREADY_CHECKED_OUT: &str = "Already checked out";
pub const ALREADY_CHECKED_IN: &str = "Already checked in";
pub const NO_ACTIVE_SESSION: &str = "No active session";

/// Message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Short confirmation that goes away on its own.
    Transient(String),
    /// Failure the user has to acknowledge.
    Blocking(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Transient(s) | Notice::Blocking(s) => s,
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, Notice::Blocking(_))
    }
}

/// Backend call issued by an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CheckIn,
    Resume,
    LunchBreak,
    FinalCheckout,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CheckIn => "checkin",
            Action::Resume => "resume",
            Action::LunchBreak => "lunch_break",
            Action::FinalCheckout => "checkout",
        }
    }

    fn done_text(&self) -> &'static str {
        match self {
            Action::CheckIn => "Checked in",
            Action::Resume => "Work resumed",
            Action::LunchBreak => "Lunch break started",
            Action::FinalCheckout => "Checked out",
        }
    }
}

/// Result of pressing a button: the call made (if any) and what to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub action: Option<Action>,
    pub notice: Notice,
}

impl Outcome {
    fn local(text: &str) -> Self {
        Self {
            action: None,
            notice: Notice::Transient(text.to_string()),
        }
    }

    /// A backend call was made and accepted.
    pub fn succeeded(&self) -> bool {
        self.action.is_some() && !self.notice.is_blocking()
    }
}

fn failure_message(err: &AppError, fallback: &str) -> String {
    err.server_message().unwrap_or(fallback).to_string()
}

pub struct AttendanceController<A: AttendanceApi, C: Clock> {
    api: A,
    clock: C,
    session: Option<AttendanceSession>,
    busy: bool,
    time_format: String,
}

impl<A: AttendanceApi, C: Clock> AttendanceController<A, C> {
    pub fn new(api: A, clock: C) -> Self {
        Self {
            api,
            clock,
            session: None,
            busy: false,
            time_format: "%H:%M:%S".to_string(),
        }
    }

    pub fn with_time_format(mut self, fmt: &str) -> Self {
        self.time_format = fmt.to_string();
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session(&self) -> Option<&AttendanceSession> {
        self.session.as_ref()
    }

    pub fn derived(&self) -> DerivedState {
        DerivedState::from_option(self.session.as_ref())
    }

    pub fn phase(&self) -> Phase {
        self.derived().phase()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn button(&self) -> ActionButton {
        ActionButton::for_phase(self.phase(), self.busy)
    }

    fn fmt_time(&self, t: NaiveTime) -> String {
        t.format(&self.time_format).to_string()
    }

    /// Re-read today's record. Failures reset to "not checked in" and are
    /// only logged: the next successful read corrects the view.
    pub fn refresh(&mut self) {
        match self.api.today() {
            Ok(session) => self.session = session,
            Err(e) => {
                tracing::warn!(error = %e, "could not fetch today's attendance");
                self.session = None;
            }
        }
    }

    /// The single action button.
    pub fn press(&mut self) -> Outcome {
        if self.busy {
            return Outcome::local(LABEL_PROCESSING);
        }
        match self.phase() {
            Phase::NotCheckedIn => self.check_in(),
            Phase::Working | Phase::OnBreak => self.check_out(),
            Phase::Completed => Outcome::local(ALREADY_CHECKED_OUT),
        }
    }

    pub fn check_in(&mut self) -> Outcome {
        if self.busy {
            return Outcome::local(LABEL_PROCESSING);
        }
        match self.phase() {
            Phase::NotCheckedIn => {}
            Phase::Completed => return Outcome::local(ALREADY_CHECKED_OUT),
            Phase::Working | Phase::OnBreak => return Outcome::local(ALREADY_CHECKED_IN),
        }

        let clicked_at = self.clock.now().time();

        self.busy = true;
        let notice = match self.api.check_in() {
            Ok(receipt) => {
                let when = receipt
                    .as_ref()
                    .and_then(|s| s.check_in.as_ref())
                    .and_then(Timestamp::local_time)
                    .unwrap_or(clicked_at);
                self.refresh();
                Notice::Transient(format!("Checked in at {}", self.fmt_time(when)))
            }
            Err(e) => {
                tracing::info!(error = %e, "check-in rejected");
                Notice::Blocking(failure_message(&e, CHECK_IN_FAILED))
            }
        };
        self.busy = false;

        Outcome {
            action: Some(Action::CheckIn),
            notice,
        }
    }

    pub fn check_out(&mut self) -> Outcome {
        if self.busy {
            return Outcome::local(LABEL_PROCESSING);
        }

        let clicked_at = self.clock.now().time();

        let (action, body) = match self.phase() {
            Phase::OnBreak => (Action::Resume, None),
            Phase::Working => match classify_checkout(clicked_at) {
                kind @ CheckoutKind::Break(_) => (Action::LunchBreak, Some(kind.request())),
                kind @ CheckoutKind::Final => (Action::FinalCheckout, Some(kind.request())),
            },
            Phase::Completed => return Outcome::local(ALREADY_CHECKED_OUT),
            Phase::NotCheckedIn => return Outcome::local(NO_ACTIVE_SESSION),
        };

        self.busy = true;
        let notice = match self.api.check_out(body) {
            Ok(()) => {
                self.refresh();
                Notice::Transient(format!(
                    "{} at {}",
                    action.done_text(),
                    self.fmt_time(clicked_at)
                ))
            }
            Err(e) => {
                tracing::info!(error = %e, action = action.as_str(), "checkout rejected");
                Notice::Blocking(failure_message(&e, CHECK_OUT_FAILED))
            }
        };
        self.busy = false;

        Outcome {
            action: Some(action),
            notice,
        }
    }
}
