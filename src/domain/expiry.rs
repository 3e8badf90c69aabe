use chrono::NaiveDateTime;
use colored::Colorize;

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from `now` until `at`, floored. 30.9 days left is 30; half a day
/// past expiry is -1.
pub fn days_to_expiration(at: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (at - now).num_seconds().div_euclid(SECONDS_PER_DAY)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryState {
    Expired,
    Expiring,
    Valid,
}

impl ExpiryState {
    /// `warn_days == 0` disables the expiring state.
    pub fn classify(days_left: i64, warn_days: u32) -> Self {
        if days_left <= 0 {
            ExpiryState::Expired
        } else if warn_days > 0 && days_left < i64::from(warn_days) {
            ExpiryState::Expiring
        } else {
            ExpiryState::Valid
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ExpiryState::Expired => Tone::Red,
            ExpiryState::Expiring => Tone::Yellow,
            ExpiryState::Valid => Tone::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Yellow,
    Green,
}

impl Tone {
    pub fn paint(&self, text: &str) -> String {
        match self {
            Tone::Red => text.red().to_string(),
            Tone::Yellow => text.yellow().to_string(),
            Tone::Green => text.green().to_string(),
        }
    }
}
