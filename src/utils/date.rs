use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};

/// The reference calendar day (local time).
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date, also accepting the words `today` and
/// `yesterday`.
pub fn parse_date(s: &str, today: NaiveDate) -> AppResult<NaiveDate> {
    match s.trim().to_ascii_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => days_before(today, 1),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(s.to_string())),
    }
}

pub fn days_before(date: NaiveDate, n: u64) -> AppResult<NaiveDate> {
    date.checked_sub_days(Days::new(n))
        .ok_or_else(|| AppError::InvalidDate(format!("{date} - {n} days")))
}
