use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

/// The instant a date starts, in UTC.
pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// `date` moved forward by `days`, saturating at the last representable date.
pub fn plus_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}
