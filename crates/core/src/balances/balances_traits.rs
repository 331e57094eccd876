//! Balance repository and service traits.
//!
//! These traits define the contract for ledger writes and statistics
//! recomputation without any database-specific types. Implementations must
//! run every ledger write and the recomputation it triggers inside one
//! transaction: if the recompute fails, the triggering write rolls back.

use chrono::NaiveDate;

use super::balances_model::{
    BalanceEntry, BalanceEntryUpdate, MonthBalance, NewBalanceEntry, YearBalance,
};
use crate::errors::Result;

/// Trait defining the contract for balance ledger persistence.
pub trait BalanceRepositoryTrait: Send + Sync {
    /// Creates a balance entry and recomputes the statistics for its month
    /// and year, all within one transaction.
    fn create(&self, new_entry: NewBalanceEntry) -> Result<BalanceEntry>;

    /// Updates a balance entry and recomputes every affected scope. When
    /// the date or employee moved, the vacated month and year are
    /// recomputed as well as the new ones.
    fn update(&self, entry_update: BalanceEntryUpdate) -> Result<BalanceEntry>;

    /// Deletes a balance entry and recomputes the statistics for the
    /// month and year it belonged to.
    ///
    /// Returns the number of deleted records.
    fn delete(&self, entry_id: &str) -> Result<usize>;

    /// Retrieves a balance entry by ID.
    fn get_by_id(&self, entry_id: &str) -> Result<BalanceEntry>;

    /// Lists balance entries, optionally filtered by employee and an
    /// inclusive date range.
    fn list(
        &self,
        employee_id: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<BalanceEntry>>;

    /// Rebuilds the month statistics row for a scope from its ledger
    /// entries. Idempotent; returns the stored row, or `None` when the
    /// scope has no activity and therefore keeps no row.
    fn recompute_month_balance(
        &self,
        employee_id: &str,
        year: i32,
        month: i32,
    ) -> Result<Option<MonthBalance>>;

    /// Rebuilds the year statistics row for a scope from its ledger
    /// entries. Idempotent; same absence rule as the month recompute.
    fn recompute_year_balance(&self, employee_id: &str, year: i32) -> Result<Option<YearBalance>>;

    /// Reads the month statistics row for a scope, if present.
    fn get_month_balance(
        &self,
        employee_id: &str,
        year: i32,
        month: i32,
    ) -> Result<Option<MonthBalance>>;

    /// Reads the year statistics row for a scope, if present.
    fn get_year_balance(&self, employee_id: &str, year: i32) -> Result<Option<YearBalance>>;

    /// Lists month statistics, optionally filtered by employee and year.
    fn list_month_balances(
        &self,
        employee_id: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<MonthBalance>>;

    /// Lists year statistics, optionally filtered by employee and year.
    fn list_year_balances(
        &self,
        employee_id: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<YearBalance>>;

    /// Sets the closed flag on an existing month statistics row.
    fn set_month_closed(
        &self,
        employee_id: &str,
        year: i32,
        month: i32,
        is_closed: bool,
    ) -> Result<MonthBalance>;
}

/// Trait defining the contract for balance service operations.
pub trait BalanceServiceTrait: Send + Sync {
    /// Creates a balance entry with business validation.
    fn create_entry(&self, new_entry: NewBalanceEntry) -> Result<BalanceEntry>;

    /// Updates a balance entry with business validation.
    fn update_entry(&self, entry_update: BalanceEntryUpdate) -> Result<BalanceEntry>;

    /// Deletes a balance entry.
    fn delete_entry(&self, entry_id: &str) -> Result<()>;

    /// Retrieves a balance entry by ID.
    fn get_entry(&self, entry_id: &str) -> Result<BalanceEntry>;

    /// Lists balance entries with optional filters.
    fn list_entries(
        &self,
        employee_id: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<BalanceEntry>>;

    /// Explicitly rebuilds the month statistics for a scope.
    fn recompute_month_balance(
        &self,
        employee_id: &str,
        year: i32,
        month: i32,
    ) -> Result<Option<MonthBalance>>;

    /// Explicitly rebuilds the year statistics for a scope.
    fn recompute_year_balance(&self, employee_id: &str, year: i32) -> Result<Option<YearBalance>>;

    /// Reads the month statistics for a scope.
    fn get_month_balance(
        &self,
        employee_id: &str,
        year: i32,
        month: i32,
    ) -> Result<Option<MonthBalance>>;

    /// Reads the year statistics for a scope.
    fn get_year_balance(&self, employee_id: &str, year: i32) -> Result<Option<YearBalance>>;

    /// Lists month statistics with optional filters.
    fn list_month_balances(
        &self,
        employee_id: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<MonthBalance>>;

    /// Lists year statistics with optional filters.
    fn list_year_balances(
        &self,
        employee_id: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<YearBalance>>;

    /// Marks a month as closed or reopens it.
    fn set_month_closed(
        &self,
        employee_id: &str,
        year: i32,
        month: i32,
        is_closed: bool,
    ) -> Result<MonthBalance>;
}
