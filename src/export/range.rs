// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Months, NaiveDate};

/// First and last day covered by a single period token:
/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(token.to_string());

    match token.len() {
        4 => {
            let y: i32 = token.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            let last = first
                .checked_add_months(Months::new(1))
                .and_then(|d| d.pred_opt())
                .ok_or_else(invalid)?;
            Ok((first, last))
        }
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Parse --range (year / month / day / intervallo).
///
/// Supporta:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let Some((start_raw, end_raw)) = r.split_once(':') else {
        return period_bounds(r.trim());
    };

    let (start, end) = (start_raw.trim(), end_raw.trim());
    if start.len() != end.len() {
        return Err(AppError::InvalidDate(format!(
            "{r}: start and end must have the same format"
        )));
    }

    let (first, _) = period_bounds(start)?;
    let (_, last) = period_bounds(end)?;

    if first > last {
        return Err(AppError::InvalidDate(format!("{r}: start is after end")));
    }
    Ok((first, last))
}
