use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::errors::Result;
use crate::utils::time_utils::validate_month;

use super::finance_model::{
    CashflowRecord, CashflowRecordUpdate, MonthlyCashflow, NewCashflowRecord,
};
use super::finance_traits::{CashflowRepositoryTrait, CashflowServiceTrait};

/// Service for managing cashflow records and their monthly totals.
pub struct CashflowService {
    repository: Arc<dyn CashflowRepositoryTrait>,
}

impl CashflowService {
    pub fn new(repository: Arc<dyn CashflowRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl CashflowServiceTrait for CashflowService {
    fn create_record(&self, new_record: NewCashflowRecord) -> Result<CashflowRecord> {
        debug!("Creating cashflow record for date {}", new_record.date);
        self.repository.create(new_record)
    }

    fn update_record(&self, update: CashflowRecordUpdate) -> Result<CashflowRecord> {
        update.validate()?;
        self.repository.update(update)
    }

    fn delete_record(&self, record_id: &str) -> Result<()> {
        self.repository.delete(record_id)?;
        Ok(())
    }

    fn get_record(&self, record_id: &str) -> Result<CashflowRecord> {
        self.repository.get_by_id(record_id)
    }

    fn list_records(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<CashflowRecord>> {
        self.repository.list(start_date, end_date)
    }

    fn recompute_month(&self, year: i32, month: i32) -> Result<Option<MonthlyCashflow>> {
        validate_month(month)?;
        self.repository.recompute_month(year, month)
    }

    fn get_monthly(&self, year: i32, month: i32) -> Result<Option<MonthlyCashflow>> {
        validate_month(month)?;
        self.repository.get_monthly(year, month)
    }

    fn list_monthly(&self, year: Option<i32>) -> Result<Vec<MonthlyCashflow>> {
        self.repository.list_monthly(year)
    }
}
