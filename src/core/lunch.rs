use crate::models::checkout::{BreakType, CheckoutRequest};
use chrono::{NaiveTime, Timelike};

/// First and last hour (inclusive) in which a checkout counts as lunch.
pub const LUNCH_FIRST_HOUR: u32 = 12;
pub const LUNCH_LAST_HOUR: u32 = 15;

/// What a checkout while working means at a given time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutKind {
    Break(BreakType),
    Final,
}

impl CheckoutKind {
    pub fn request(&self) -> CheckoutRequest {
        match self {
            CheckoutKind::Break(BreakType::Lunch) => CheckoutRequest::lunch_break(),
            CheckoutKind::Final => CheckoutRequest::final_checkout(),
        }
    }
}

/// Classify a checkout by the wall-clock hour it was requested at.
pub fn classify_checkout(at: NaiveTime) -> CheckoutKind {
    if (LUNCH_FIRST_HOUR..=LUNCH_LAST_HOUR).contains(&at.hour()) {
        CheckoutKind::Break(BreakType::Lunch)
    } else {
        CheckoutKind::Final
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::checkout::CheckoutType;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn every_minute_of_hours_twelve_to_fifteen_is_lunch() {
        assert_eq!(classify_checkout(at(12, 0)), CheckoutKind::Break(BreakType::Lunch));
        assert_eq!(classify_checkout(at(13, 30)), CheckoutKind::Break(BreakType::Lunch));
        assert_eq!(classify_checkout(at(15, 59)), CheckoutKind::Break(BreakType::Lunch));
    }

    #[test]
    fn outside_the_window_is_final() {
        assert_eq!(classify_checkout(at(11, 59)), CheckoutKind::Final);
        assert_eq!(classify_checkout(at(16, 0)), CheckoutKind::Final);
        assert_eq!(classify_checkout(at(17, 0)), CheckoutKind::Final);
        assert_eq!(classify_checkout(at(0, 30)), CheckoutKind::Final);
    }

    #[test]
    fn kinds_map_to_wire_requests() {
        let r = classify_checkout(at(13, 0)).request();
        assert_eq!(r.checkout_type, CheckoutType::Break);
        assert_eq!(r.break_type, Some(BreakType::Lunch));

        let r = classify_checkout(at(18, 0)).request();
        assert_eq!(r.checkout_type, CheckoutType::Final);
        assert_eq!(r.break_type, None);
    }
}
