use chrono::NaiveDateTime;

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
