//! Balance ledger domain models.
//!
//! A [`BalanceEntry`] is the finest-grained payroll fact: what an employee
//! earned and was paid on one calendar day. [`MonthBalance`] and
//! [`YearBalance`] are denormalized sums over those entries, rebuilt from
//! scratch whenever an entry changes. They are never patched incrementally
//! and never derived from each other.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A single dated earned/paid record for one employee.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntry {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub earned_amount: Decimal,
    pub paid_amount: Decimal,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl BalanceEntry {
    /// Amount still owed to the employee for this entry.
    pub fn net_balance(&self) -> Decimal {
        self.earned_amount - self.paid_amount
    }
}

/// Input model for creating a new balance entry.
///
/// At most one entry may exist per (employee, date); a second write for
/// the same day is rejected before anything is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBalanceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub employee_id: String,
    pub date: NaiveDate,
    /// Missing amounts are coerced to zero at save
    pub earned_amount: Option<Decimal>,
    pub paid_amount: Option<Decimal>,
    pub description: Option<String>,
}

impl NewBalanceEntry {
    /// Validates the new entry data.
    pub fn validate(&self) -> Result<()> {
        if self.employee_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "employeeId".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing balance entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntryUpdate {
    pub id: Option<String>,
    pub employee_id: String,
    pub date: NaiveDate,
    pub earned_amount: Option<Decimal>,
    pub paid_amount: Option<Decimal>,
    pub description: Option<String>,
}

impl BalanceEntryUpdate {
    /// Validates the entry update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Balance entry ID is required for updates".to_string(),
            )));
        }
        if self.employee_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "employeeId".to_string(),
            )));
        }
        Ok(())
    }
}

/// Monthly balance statistics for one employee.
///
/// Present only while the underlying month has non-zero totals; a scope
/// that sums to zero has no row at all. Row ids are not stable across
/// recomputes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MonthBalance {
    pub id: String,
    pub employee_id: String,
    pub year: i32,
    pub month: i32,
    pub total_earned: Decimal,
    pub total_paid: Decimal,
    pub net_balance: Decimal,
    /// Manual month-closing flag, preserved across recomputes while the
    /// row survives
    pub is_closed: bool,
}

/// Yearly balance statistics for one employee.
///
/// Derived by summing ledger entries across the year, never by summing
/// [`MonthBalance`] rows.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct YearBalance {
    pub id: String,
    pub employee_id: String,
    pub year: i32,
    pub total_earned: Decimal,
    pub total_paid: Decimal,
    pub net_balance: Decimal,
}
