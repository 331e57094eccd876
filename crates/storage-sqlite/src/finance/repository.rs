use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use uuid::Uuid;

use shopledger_core::finance::{
    CashflowRecord, CashflowRecordUpdate, CashflowRepositoryTrait, CashflowTotals, MonthlyCashflow,
    NewCashflowRecord,
};
use shopledger_core::utils::time_utils::month_bounds;
use shopledger_core::Result;

use super::model::{CashflowRecordDB, MonthlyCashflowDB};
use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::errors::StorageError;
use crate::schema::cashflow_records;
use crate::schema::cashflow_records::dsl::*;
use crate::schema::monthly_cashflows;
use crate::utils::parse_decimal;

/// Repository for daily cashflow records and their derived monthly rows.
///
/// Record writes recompute the affected months in the same transaction,
/// mirroring how the balance ledger maintains its statistics.
pub struct CashflowRepository {
    pool: Arc<DbPool>,
}

impl CashflowRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

/// Sums a month's records and rewrites its derived row from scratch. A
/// month without activity keeps no row.
fn recompute_month_tx(
    conn: &mut SqliteConnection,
    target_year: i32,
    target_month: i32,
) -> Result<Option<MonthlyCashflow>> {
    let (start, end) = month_bounds(target_year, target_month)?;

    let amounts = cashflow_records
        .filter(date.ge(start))
        .filter(date.le(end))
        .select((income_amount, expense_amount))
        .load::<(String, String)>(conn)
        .map_err(StorageError::from)?;

    let totals = CashflowTotals::from_amounts(amounts.iter().map(|(income, expense)| {
        (
            parse_decimal(income, "income_amount"),
            parse_decimal(expense, "expense_amount"),
        )
    }));

    diesel::delete(
        monthly_cashflows::table
            .filter(monthly_cashflows::year.eq(target_year))
            .filter(monthly_cashflows::month.eq(target_month)),
    )
    .execute(conn)
    .map_err(StorageError::from)?;

    match MonthlyCashflow::from_totals(target_year, target_month, totals) {
        Some(monthly) => {
            let row: MonthlyCashflowDB = monthly.clone().into();
            diesel::insert_into(monthly_cashflows::table)
                .values(&row)
                .execute(conn)
                .map_err(StorageError::from)?;
            Ok(Some(monthly))
        }
        None => Ok(None),
    }
}

fn month_of(record_date: NaiveDate) -> (i32, i32) {
    (record_date.year(), record_date.month() as i32)
}

impl CashflowRepositoryTrait for CashflowRepository {
    fn create(&self, new_record: NewCashflowRecord) -> Result<CashflowRecord> {
        self.pool.execute(move |conn| {
            let mut record_db: CashflowRecordDB = new_record.into();
            if record_db.id.is_empty() {
                record_db.id = Uuid::new_v4().to_string();
            }

            diesel::insert_into(cashflow_records::table)
                .values(&record_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            let (target_year, target_month) = month_of(record_db.date);
            recompute_month_tx(conn, target_year, target_month)?;

            Ok(record_db.into())
        })
    }

    fn update(&self, update: CashflowRecordUpdate) -> Result<CashflowRecord> {
        self.pool.execute(move |conn| {
            let update_id = update.id.clone().unwrap_or_default();

            let existing = cashflow_records
                .find(&update_id)
                .select(CashflowRecordDB::as_select())
                .first::<CashflowRecordDB>(conn)
                .map_err(StorageError::from)?;

            let mut record_db: CashflowRecordDB = update.into();
            record_db.id = update_id;
            record_db.created_by = existing.created_by.clone();
            record_db.created_at = existing.created_at;

            diesel::update(cashflow_records.find(&record_db.id))
                .set(&record_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            let (old_year, old_month) = month_of(existing.date);
            let (new_year, new_month) = month_of(record_db.date);
            recompute_month_tx(conn, old_year, old_month)?;
            if (old_year, old_month) != (new_year, new_month) {
                recompute_month_tx(conn, new_year, new_month)?;
            }

            Ok(record_db.into())
        })
    }

    fn delete(&self, record_id: &str) -> Result<usize> {
        let record_id = record_id.to_string();
        self.pool.execute(move |conn| {
            let existing = cashflow_records
                .find(&record_id)
                .select(CashflowRecordDB::as_select())
                .first::<CashflowRecordDB>(conn)
                .map_err(StorageError::from)?;

            let affected = diesel::delete(cashflow_records.find(&record_id))
                .execute(conn)
                .map_err(StorageError::from)?;

            let (target_year, target_month) = month_of(existing.date);
            recompute_month_tx(conn, target_year, target_month)?;

            Ok(affected)
        })
    }

    fn get_by_id(&self, record_id: &str) -> Result<CashflowRecord> {
        let mut conn = get_connection(&self.pool)?;

        let record_db = cashflow_records
            .find(record_id)
            .select(CashflowRecordDB::as_select())
            .first::<CashflowRecordDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(record_db.into())
    }

    fn list(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<CashflowRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = cashflow_records.into_boxed();
        if let Some(start) = start_date {
            query = query.filter(date.ge(start));
        }
        if let Some(end) = end_date {
            query = query.filter(date.le(end));
        }

        let rows = query
            .select(CashflowRecordDB::as_select())
            .order(date.desc())
            .load::<CashflowRecordDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(CashflowRecord::from).collect())
    }

    fn recompute_month(&self, target_year: i32, target_month: i32) -> Result<Option<MonthlyCashflow>> {
        self.pool
            .execute(move |conn| recompute_month_tx(conn, target_year, target_month))
    }

    fn get_monthly(&self, target_year: i32, target_month: i32) -> Result<Option<MonthlyCashflow>> {
        let mut conn = get_connection(&self.pool)?;

        let row = monthly_cashflows::table
            .filter(monthly_cashflows::year.eq(target_year))
            .filter(monthly_cashflows::month.eq(target_month))
            .select(MonthlyCashflowDB::as_select())
            .first::<MonthlyCashflowDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(row.map(MonthlyCashflow::from))
    }

    fn list_monthly(&self, year_filter: Option<i32>) -> Result<Vec<MonthlyCashflow>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = monthly_cashflows::table.into_boxed();
        if let Some(target_year) = year_filter {
            query = query.filter(monthly_cashflows::year.eq(target_year));
        }

        let rows = query
            .select(MonthlyCashflowDB::as_select())
            .order((monthly_cashflows::year.desc(), monthly_cashflows::month.desc()))
            .load::<MonthlyCashflowDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(MonthlyCashflow::from).collect())
    }
}
