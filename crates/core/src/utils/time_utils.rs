use chrono::NaiveDate;

use crate::errors::{Error, Result, ValidationError};

/// Checks that a month number lies within the calendar range.
pub fn validate_month(month: i32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Month {} is out of range (expected 1-12)",
            month
        ))))
    }
}

/// Returns the first and last day of the given month.
///
/// Used to turn a (year, month) scope into an inclusive date range for
/// range queries over dated rows.
pub fn month_bounds(year: i32, month: i32) -> Result<(NaiveDate, NaiveDate)> {
    validate_month(month)?;
    let start = NaiveDate::from_ymd_opt(year, month as u32, 1).ok_or_else(|| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "Invalid calendar month {}-{:02}",
            year, month
        )))
    })?;
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month as u32 + 1, 1)
    };
    let end = next_month_start.and_then(|d| d.pred_opt()).ok_or_else(|| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "Invalid calendar month {}-{:02}",
            year, month
        )))
    })?;
    Ok((start, end))
}

/// Returns the first and last day of the given year.
pub fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1);
    let end = NaiveDate::from_ymd_opt(year, 12, 31);
    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Invalid calendar year {}",
            year
        )))),
    }
}
