use log::debug;
use std::sync::Arc;

use super::balances_model::{
    BalanceEntry, BalanceEntryUpdate, MonthBalance, NewBalanceEntry, YearBalance,
};
use super::balances_traits::{BalanceRepositoryTrait, BalanceServiceTrait};
use crate::errors::Result;
use crate::utils::time_utils::validate_month;
use chrono::NaiveDate;

/// Service for managing the balance ledger and its statistics
pub struct BalanceService {
    repository: Arc<dyn BalanceRepositoryTrait>,
}

impl BalanceService {
    /// Creates a new BalanceService instance
    pub fn new(repository: Arc<dyn BalanceRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl BalanceServiceTrait for BalanceService {
    /// Creates a balance entry; statistics for the affected month and
    /// year are rebuilt in the same transaction
    fn create_entry(&self, new_entry: NewBalanceEntry) -> Result<BalanceEntry> {
        debug!(
            "Creating balance entry for employee {} on {}",
            new_entry.employee_id, new_entry.date
        );
        new_entry.validate()?;
        self.repository.create(new_entry)
    }

    /// Updates a balance entry
    fn update_entry(&self, entry_update: BalanceEntryUpdate) -> Result<BalanceEntry> {
        entry_update.validate()?;
        self.repository.update(entry_update)
    }

    /// Deletes a balance entry by ID
    fn delete_entry(&self, entry_id: &str) -> Result<()> {
        self.repository.delete(entry_id)?;
        Ok(())
    }

    /// Retrieves a balance entry by ID
    fn get_entry(&self, entry_id: &str) -> Result<BalanceEntry> {
        self.repository.get_by_id(entry_id)
    }

    /// Lists balance entries with optional filters
    fn list_entries(
        &self,
        employee_id: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<BalanceEntry>> {
        self.repository.list(employee_id, start_date, end_date)
    }

    /// Explicitly rebuilds the month statistics for a scope
    fn recompute_month_balance(
        &self,
        employee_id: &str,
        year: i32,
        month: i32,
    ) -> Result<Option<MonthBalance>> {
        validate_month(month)?;
        self.repository
            .recompute_month_balance(employee_id, year, month)
    }

    /// Explicitly rebuilds the year statistics for a scope
    fn recompute_year_balance(&self, employee_id: &str, year: i32) -> Result<Option<YearBalance>> {
        self.repository.recompute_year_balance(employee_id, year)
    }

    /// Reads the month statistics for a scope
    fn get_month_balance(
        &self,
        employee_id: &str,
        year: i32,
        month: i32,
    ) -> Result<Option<MonthBalance>> {
        validate_month(month)?;
        self.repository.get_month_balance(employee_id, year, month)
    }

    /// Reads the year statistics for a scope
    fn get_year_balance(&self, employee_id: &str, year: i32) -> Result<Option<YearBalance>> {
        self.repository.get_year_balance(employee_id, year)
    }

    /// Lists month statistics with optional filters
    fn list_month_balances(
        &self,
        employee_id: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<MonthBalance>> {
        self.repository.list_month_balances(employee_id, year)
    }

    /// Lists year statistics with optional filters
    fn list_year_balances(
        &self,
        employee_id: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<YearBalance>> {
        self.repository.list_year_balances(employee_id, year)
    }

    /// Marks a month as closed or reopens it
    fn set_month_closed(
        &self,
        employee_id: &str,
        year: i32,
        month: i32,
        is_closed: bool,
    ) -> Result<MonthBalance> {
        validate_month(month)?;
        debug!(
            "Setting month {}-{:02} closed={} for employee {}",
            year, month, is_closed, employee_id
        );
        self.repository
            .set_month_closed(employee_id, year, month, is_closed)
    }
}
