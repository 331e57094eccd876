use chrono::NaiveDate;
use thiserror::Error;

/// Custom error type for balance-related operations
#[derive(Debug, Error)]
pub enum BalanceError {
    /// An entry already exists for this employee and date.
    #[error("A balance entry for employee {employee_id} on {date} already exists")]
    DuplicateEntry {
        employee_id: String,
        date: NaiveDate,
    },

    /// The month scope has no statistics row. Months whose entries sum to
    /// zero legitimately have no row, so this is a domain condition rather
    /// than a plain missing-record error.
    #[error("No month balance exists for employee {employee_id} in {year}-{month:02}")]
    MonthNotFound {
        employee_id: String,
        year: i32,
        month: i32,
    },
}
