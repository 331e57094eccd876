//! Repository and service traits for the cashflow domain.
//!
//! Every record write recomputes the affected monthly totals inside the
//! same transaction, so readers never observe a record without its
//! derived row.

use chrono::NaiveDate;

use crate::errors::Result;

use super::finance_model::{
    CashflowRecord, CashflowRecordUpdate, MonthlyCashflow, NewCashflowRecord,
};

/// Trait defining data access for cashflow records and their derived
/// monthly totals.
pub trait CashflowRepositoryTrait: Send + Sync {
    /// Persists a new record and recomputes its month, in one
    /// transaction.
    fn create(&self, new_record: NewCashflowRecord) -> Result<CashflowRecord>;
    /// Updates a record. When the date moves to another month the
    /// vacated month is recomputed as well.
    fn update(&self, update: CashflowRecordUpdate) -> Result<CashflowRecord>;
    /// Deletes a record and recomputes its month.
    fn delete(&self, record_id: &str) -> Result<usize>;
    fn get_by_id(&self, record_id: &str) -> Result<CashflowRecord>;
    fn list(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<CashflowRecord>>;

    /// Rebuilds the derived row for one month from its records. Returns
    /// `None` when the month has no activity.
    fn recompute_month(&self, year: i32, month: i32) -> Result<Option<MonthlyCashflow>>;
    fn get_monthly(&self, year: i32, month: i32) -> Result<Option<MonthlyCashflow>>;
    fn list_monthly(&self, year: Option<i32>) -> Result<Vec<MonthlyCashflow>>;
}

/// Trait defining the business operations of the cashflow domain.
pub trait CashflowServiceTrait: Send + Sync {
    fn create_record(&self, new_record: NewCashflowRecord) -> Result<CashflowRecord>;
    fn update_record(&self, update: CashflowRecordUpdate) -> Result<CashflowRecord>;
    fn delete_record(&self, record_id: &str) -> Result<()>;
    fn get_record(&self, record_id: &str) -> Result<CashflowRecord>;
    fn list_records(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<CashflowRecord>>;

    fn recompute_month(&self, year: i32, month: i32) -> Result<Option<MonthlyCashflow>>;
    fn get_monthly(&self, year: i32, month: i32) -> Result<Option<MonthlyCashflow>>;
    fn list_monthly(&self, year: Option<i32>) -> Result<Vec<MonthlyCashflow>>;
}
