use time::{Date, Duration, OffsetDateTime, macros::format_description};

/// Current calendar day in UTC.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Unix timestamp of the UTC midnight that starts `day`.
pub fn day_start(day: Date) -> i64 {
    day.midnight().assume_utc().unix_timestamp()
}

pub fn day_from_timestamp(timestamp: i64) -> crate::Result<Date> {
    Ok(OffsetDateTime::from_unix_timestamp(timestamp)?.date())
}

/// `YYYY-MM-DD`, the wire format of plan dates.
pub fn format_day(day: Date) -> crate::Result<String> {
    Ok(day.format(format_description!("[year]-[month]-[day]"))?)
}

pub fn days_before(day: Date, days: u32) -> Date {
    day.saturating_sub(Duration::days(days.into()))
}

pub fn now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
