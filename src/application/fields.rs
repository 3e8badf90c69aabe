use chrono::NaiveDateTime;
use crate::domain::{days_to_expiration, ExpiryState, ProfileRecord};
use super::format::{FieldSource, FieldValue};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldOptions {
    pub warn_days: u32,
    pub mark_expired: bool,
}

/// Field values for one record, as seen at `now`.
pub struct FieldProvider<'a> {
    record: &'a ProfileRecord,
    options: FieldOptions,
    now: NaiveDateTime,
}

impl<'a> FieldProvider<'a> {
    pub fn new(record: &'a ProfileRecord, options: FieldOptions, now: NaiveDateTime) -> Self {
        Self { record, options, now }
    }

    pub fn expiry_state(&self) -> ExpiryState {
        let days = days_to_expiration(self.record.expiration_date, self.now);
        ExpiryState::classify(days, self.options.warn_days)
    }

    fn expiration(&self) -> FieldValue {
        let text = format_date(self.record.expiration_date);
        if self.options.mark_expired {
            FieldValue::toned(text, self.expiry_state().tone())
        } else {
            FieldValue::plain(text)
        }
    }
}

impl FieldSource for FieldProvider<'_> {
    fn value(&self, code: char) -> FieldValue {
        match code {
            'u' => FieldValue::plain(self.record.uuid.as_str()),
            'n' => FieldValue::plain(self.record.name.as_str()),
            'a' => FieldValue::plain(self.record.app_id_name.as_str()),
            't' => FieldValue::plain(self.record.team_name.as_str()),
            'c' => FieldValue::plain(format_date(self.record.creation_date)),
            'e' => self.expiration(),
            _ => FieldValue::plain(""),
        }
    }
}

pub fn format_date(at: NaiveDateTime) -> String {
    at.format(DATE_FORMAT).to_string()
}
