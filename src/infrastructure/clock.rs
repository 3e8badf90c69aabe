use chrono::{NaiveDateTime, Utc};
use crate::ports::Clock;

pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self { Self }
}

impl Default for SystemClock {
    fn default() -> Self { Self::new() }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime { Utc::now().naive_utc() }
}

/// Clock pinned to one instant.
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self { Self(at) }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime { self.0 }
}
