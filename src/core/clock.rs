use chrono::{Local, NaiveDateTime, NaiveTime};

/// Source of "now" for decisions taken at click time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a time of day (today's date), used by `--at` and tests.
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn today_at(time: NaiveTime) -> Self {
        Self(Local::now().date_naive().and_time(time))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
