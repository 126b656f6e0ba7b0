//! Text rendering of the attendance tracking box.

use crate::models::phase::{ActionButton, DerivedState};
use crate::models::session::AttendanceSession;
use crate::utils::colors::{self, GREEN, YELLOW};
use crate::utils::time::{format_hm, format_minutes};
use chrono::NaiveDateTime;

pub struct BoxView<'a> {
    pub now: NaiveDateTime,
    pub session: Option<&'a AttendanceSession>,
    pub button: ActionButton,
    pub time_format: &'a str,
    pub color: bool,
}

impl BoxView<'_> {
    fn paint(&self, color: &str, s: &str) -> String {
        if self.color {
            colors::paint(color, s)
        } else {
            s.to_string()
        }
    }

    pub fn clock_line(&self) -> String {
        format!(
            "🕒 {}",
            self.now
                .format(&format!("%a %d %b %Y  {}", self.time_format))
        )
    }

    pub fn button_line(&self) -> String {
        let label = format!("[ {} ]", self.button.label);
        let label = self.paint(colors::color_for_button(self.button.style), &label);
        if self.button.enabled {
            label
        } else {
            format!("{label} (disabled)")
        }
    }

    pub fn render(&self) -> String {
        let mut out = Vec::new();
        out.push("Attendance Tracking".to_string());
        out.push(self.clock_line());

        let derived = DerivedState::from_option(self.session);
        out.push(format!(
            "Status: {}",
            self.paint(
                colors::color_for_phase(derived.phase()),
                derived.phase().describe()
            )
        ));

        if let Some(s) = self.session
            && derived.checked_in_today
        {
            out.push(format!(
                "Working {}   Break {}",
                self.paint(GREEN, &format_minutes(s.worked_minutes())),
                self.paint(YELLOW, &format_minutes(s.break_total_minutes())),
            ));

            let since = format_hm(s.check_in.as_ref().and_then(|t| t.local_time()));
            out.push(self.paint(GREEN, &format!("✓ Since {since}")));

            if derived.on_break {
                out.push(self.paint(YELLOW, "⏸ On Break"));
            }
        }

        out.push(self.button_line());
        out.join("\n")
    }
}
