use super::session::AttendanceSession;
use serde::Serialize;
use std::fmt;

/// Client-side view of where the user is in the working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    NotCheckedIn,
    Working,
    OnBreak,
    Completed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotCheckedIn => "NOT_CHECKED_IN",
            Phase::Working => "WORKING",
            Phase::OnBreak => "ON_BREAK",
            Phase::Completed => "COMPLETED",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Phase::NotCheckedIn => "Not checked in",
            Phase::Working => "Working",
            Phase::OnBreak => "On break",
            Phase::Completed => "Day complete",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flags recomputed from the latest server record on every fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivedState {
    pub checked_in_today: bool,
    pub checked_out_today: bool,
    pub on_break: bool,
    pub is_currently_working: bool,
}

impl DerivedState {
    pub fn of(session: &AttendanceSession) -> Self {
        let checked_in_today = session.check_in.is_some();
        let checked_out_today = session.check_out.is_some();
        let on_break = session.break_start_time.is_some() && session.break_end_time.is_none();

        Self {
            checked_in_today,
            checked_out_today,
            on_break,
            is_currently_working: checked_in_today && !checked_out_today && !on_break,
        }
    }

    /// State of a user with no record for today.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_option(session: Option<&AttendanceSession>) -> Self {
        session.map(Self::of).unwrap_or_default()
    }

    pub fn phase(&self) -> Phase {
        if !self.checked_in_today {
            Phase::NotCheckedIn
        } else if self.checked_out_today {
            Phase::Completed
        } else if self.on_break {
            Phase::OnBreak
        } else {
            Phase::Working
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Accent gradient inviting a check-in.
    Primary,
    /// Orange: working, a press pauses or ends the day.
    Warning,
    /// Green: on break, a press resumes work.
    Resume,
    /// Greyed out "Day Complete".
    Muted,
}

/// The single action button shown for the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub label: &'static str,
    pub enabled: bool,
    pub style: ButtonStyle,
}

pub const LABEL_PROCESSING: &str = "Processing...";
pub const LABEL_DAY_COMPLETE: &str = "✓ Day Complete";
pub const LABEL_RESUME: &str = "▶ Resume Work";
pub const LABEL_BREAK_OR_CHECKOUT: &str = "⏸ Take Break / Check Out";
pub const LABEL_CHECK_IN: &str = "▶ Check In";

impl ActionButton {
    pub fn for_phase(phase: Phase, busy: bool) -> Self {
        let style = match phase {
            Phase::Completed => ButtonStyle::Muted,
            Phase::OnBreak => ButtonStyle::Resume,
            Phase::Working => ButtonStyle::Warning,
            Phase::NotCheckedIn => ButtonStyle::Primary,
        };

        let label = if busy {
            LABEL_PROCESSING
        } else {
            match phase {
                Phase::Completed => LABEL_DAY_COMPLETE,
                Phase::OnBreak => LABEL_RESUME,
                Phase::Working => LABEL_BREAK_OR_CHECKOUT,
                Phase::NotCheckedIn => LABEL_CHECK_IN,
            }
        };

        Self {
            label,
            enabled: !busy && phase != Phase::Completed,
            style,
        }
    }
}
