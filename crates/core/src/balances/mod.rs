//! Balances module - the employee payroll ledger and its derived
//! month/year statistics.

mod balances_aggregator;
mod balances_errors;
mod balances_model;
mod balances_service;
mod balances_traits;

#[cfg(test)]
mod balances_model_tests;

// Re-export the public interface
pub use balances_aggregator::PeriodTotals;
pub use balances_errors::BalanceError;
pub use balances_model::{
    BalanceEntry, BalanceEntryUpdate, MonthBalance, NewBalanceEntry, YearBalance,
};
pub use balances_service::BalanceService;
pub use balances_traits::{BalanceRepositoryTrait, BalanceServiceTrait};
