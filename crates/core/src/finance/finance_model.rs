//! Cashflow domain models.
//!
//! `CashflowRecord` rows are the ledger of daily income and expense
//! figures. `MonthlyCashflow` rows are derived from them and rebuilt
//! whenever a record changes; they are never edited directly.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::ValidationError, Error, Result};

/// A daily cashflow record. Several records may share a date.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CashflowRecord {
    pub id: String,
    pub date: NaiveDate,
    pub income_amount: Decimal,
    pub expense_amount: Decimal,
    pub description: Option<String>,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
}

impl CashflowRecord {
    /// Profit contributed by this record: income minus expense.
    pub fn net_profit(&self) -> Decimal {
        self.income_amount - self.expense_amount
    }
}

/// Input model for creating a new cashflow record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCashflowRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: NaiveDate,
    /// Missing amounts are coerced to zero at save
    pub income_amount: Option<Decimal>,
    pub expense_amount: Option<Decimal>,
    pub description: Option<String>,
    /// Audit field supplied by the caller's session
    pub created_by: Option<String>,
}

/// Input model for updating an existing cashflow record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowRecordUpdate {
    pub id: Option<String>,
    pub date: NaiveDate,
    pub income_amount: Option<Decimal>,
    pub expense_amount: Option<Decimal>,
    pub description: Option<String>,
}

impl CashflowRecordUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cashflow record ID is required for updates".to_string(),
            )));
        }
        Ok(())
    }
}

/// Derived monthly cashflow totals.
///
/// A row exists only while its month carries income or expense
/// activity. Each recompute replaces the row wholesale, so its id is
/// not stable across writes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashflow {
    pub id: String,
    pub year: i32,
    pub month: i32,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_profit: Decimal,
}

/// Running income and expense totals over a set of cashflow records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CashflowTotals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
}

impl CashflowTotals {
    pub fn add_record(&mut self, income: Decimal, expense: Decimal) {
        self.total_income += income;
        self.total_expense += expense;
    }

    pub fn from_amounts<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = (Decimal, Decimal)>,
    {
        let mut totals = Self::default();
        for (income, expense) in amounts {
            totals.add_record(income, expense);
        }
        totals
    }

    pub fn net_profit(&self) -> Decimal {
        self.total_income - self.total_expense
    }

    /// A month only keeps a derived row while it has activity. Both
    /// totals at exactly zero count as none.
    pub fn has_activity(&self) -> bool {
        !self.total_income.is_zero() || !self.total_expense.is_zero()
    }
}

impl MonthlyCashflow {
    /// Builds the replacement row for a month, or `None` when the month
    /// has no activity and must not keep one.
    pub fn from_totals(year: i32, month: i32, totals: CashflowTotals) -> Option<Self> {
        if !totals.has_activity() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4().to_string(),
            year,
            month,
            total_income: totals.total_income,
            total_expense: totals.total_expense,
            net_profit: totals.net_profit(),
        })
    }
}
