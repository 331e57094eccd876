use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use uuid::Uuid;

use shopledger_core::balances::{
    BalanceEntry, BalanceEntryUpdate, BalanceError, BalanceRepositoryTrait, MonthBalance,
    NewBalanceEntry, PeriodTotals, YearBalance,
};
use shopledger_core::utils::time_utils::{month_bounds, year_bounds};
use shopledger_core::{Error, Result};

use super::model::{BalanceEntryDB, MonthBalanceDB, YearBalanceDB};
use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::errors::StorageError;
use crate::schema::balance_entries;
use crate::schema::balance_entries::dsl::*;
use crate::schema::{month_balances, year_balances};
use crate::utils::parse_decimal;

/// Repository for the payroll balance ledger.
///
/// Every write recomputes the affected month and year statistics rows
/// inside the same transaction as the triggering change, so the
/// aggregates can never drift from the entries they summarize.
pub struct BalanceRepository {
    pool: Arc<DbPool>,
}

impl BalanceRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

/// Sums the ledger entries for one employee and month and rewrites the
/// statistics row from scratch. The previous row's closed flag survives
/// the rewrite; a month without activity keeps no row at all.
fn recompute_month_tx(
    conn: &mut SqliteConnection,
    employee: &str,
    target_year: i32,
    target_month: i32,
) -> Result<Option<MonthBalance>> {
    let (start, end) = month_bounds(target_year, target_month)?;

    let amounts = balance_entries
        .filter(employee_id.eq(employee))
        .filter(date.ge(start))
        .filter(date.le(end))
        .select((earned_amount, paid_amount))
        .load::<(String, String)>(conn)
        .map_err(StorageError::from)?;

    let totals = PeriodTotals::from_amounts(amounts.iter().map(|(earned, paid)| {
        (
            parse_decimal(earned, "earned_amount"),
            parse_decimal(paid, "paid_amount"),
        )
    }));

    let was_closed = month_balances::table
        .filter(month_balances::employee_id.eq(employee))
        .filter(month_balances::year.eq(target_year))
        .filter(month_balances::month.eq(target_month))
        .select(month_balances::is_closed)
        .first::<bool>(conn)
        .optional()
        .map_err(StorageError::from)?;

    diesel::delete(
        month_balances::table
            .filter(month_balances::employee_id.eq(employee))
            .filter(month_balances::year.eq(target_year))
            .filter(month_balances::month.eq(target_month)),
    )
    .execute(conn)
    .map_err(StorageError::from)?;

    match MonthBalance::from_totals(
        employee,
        target_year,
        target_month,
        &totals,
        was_closed.unwrap_or(false),
    ) {
        Some(balance) => {
            let row: MonthBalanceDB = balance.clone().into();
            diesel::insert_into(month_balances::table)
                .values(&row)
                .execute(conn)
                .map_err(StorageError::from)?;
            Ok(Some(balance))
        }
        None => Ok(None),
    }
}

/// Same rewrite as [`recompute_month_tx`], over a whole year.
fn recompute_year_tx(
    conn: &mut SqliteConnection,
    employee: &str,
    target_year: i32,
) -> Result<Option<YearBalance>> {
    let (start, end) = year_bounds(target_year)?;

    let amounts = balance_entries
        .filter(employee_id.eq(employee))
        .filter(date.ge(start))
        .filter(date.le(end))
        .select((earned_amount, paid_amount))
        .load::<(String, String)>(conn)
        .map_err(StorageError::from)?;

    let totals = PeriodTotals::from_amounts(amounts.iter().map(|(earned, paid)| {
        (
            parse_decimal(earned, "earned_amount"),
            parse_decimal(paid, "paid_amount"),
        )
    }));

    diesel::delete(
        year_balances::table
            .filter(year_balances::employee_id.eq(employee))
            .filter(year_balances::year.eq(target_year)),
    )
    .execute(conn)
    .map_err(StorageError::from)?;

    match YearBalance::from_totals(employee, target_year, &totals) {
        Some(balance) => {
            let row: YearBalanceDB = balance.clone().into();
            diesel::insert_into(year_balances::table)
                .values(&row)
                .execute(conn)
                .map_err(StorageError::from)?;
            Ok(Some(balance))
        }
        None => Ok(None),
    }
}

/// Refreshes both statistics scopes touched by an entry on the given day.
fn recompute_scopes_tx(
    conn: &mut SqliteConnection,
    employee: &str,
    entry_date: NaiveDate,
) -> Result<()> {
    let target_year = entry_date.year();
    let target_month = entry_date.month() as i32;
    recompute_month_tx(conn, employee, target_year, target_month)?;
    recompute_year_tx(conn, employee, target_year)?;
    Ok(())
}

fn month_scope(employee: &str, entry_date: NaiveDate) -> (String, i32, i32) {
    (
        employee.to_string(),
        entry_date.year(),
        entry_date.month() as i32,
    )
}

impl BalanceRepositoryTrait for BalanceRepository {
    fn create(&self, new_entry: NewBalanceEntry) -> Result<BalanceEntry> {
        self.pool.execute(move |conn| {
            let existing = balance_entries
                .filter(employee_id.eq(&new_entry.employee_id))
                .filter(date.eq(new_entry.date))
                .select(id)
                .first::<String>(conn)
                .optional()
                .map_err(StorageError::from)?;
            if existing.is_some() {
                return Err(Error::Balance(BalanceError::DuplicateEntry {
                    employee_id: new_entry.employee_id.clone(),
                    date: new_entry.date,
                }));
            }

            let mut entry_db: BalanceEntryDB = new_entry.into();
            if entry_db.id.is_empty() {
                entry_db.id = Uuid::new_v4().to_string();
            }

            diesel::insert_into(balance_entries::table)
                .values(&entry_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            recompute_scopes_tx(conn, &entry_db.employee_id, entry_db.date)?;

            Ok(entry_db.into())
        })
    }

    fn update(&self, entry_update: BalanceEntryUpdate) -> Result<BalanceEntry> {
        self.pool.execute(move |conn| {
            let update_id = entry_update.id.clone().unwrap_or_default();

            let existing = balance_entries
                .find(&update_id)
                .select(BalanceEntryDB::as_select())
                .first::<BalanceEntryDB>(conn)
                .map_err(StorageError::from)?;

            let conflict = balance_entries
                .filter(employee_id.eq(&entry_update.employee_id))
                .filter(date.eq(entry_update.date))
                .filter(id.ne(&update_id))
                .select(id)
                .first::<String>(conn)
                .optional()
                .map_err(StorageError::from)?;
            if conflict.is_some() {
                return Err(Error::Balance(BalanceError::DuplicateEntry {
                    employee_id: entry_update.employee_id.clone(),
                    date: entry_update.date,
                }));
            }

            let mut entry_db: BalanceEntryDB = entry_update.into();
            entry_db.id = update_id;
            entry_db.created_at = existing.created_at;

            diesel::update(balance_entries.find(&entry_db.id))
                .set(&entry_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            // A moved entry leaves a hole behind it, so the scope it
            // vacated is rewritten along with the one it landed in.
            recompute_scopes_tx(conn, &existing.employee_id, existing.date)?;
            if month_scope(&existing.employee_id, existing.date)
                != month_scope(&entry_db.employee_id, entry_db.date)
            {
                recompute_scopes_tx(conn, &entry_db.employee_id, entry_db.date)?;
            }

            Ok(entry_db.into())
        })
    }

    fn delete(&self, entry_id: &str) -> Result<usize> {
        let entry_id = entry_id.to_string();
        self.pool.execute(move |conn| {
            let existing = balance_entries
                .find(&entry_id)
                .select(BalanceEntryDB::as_select())
                .first::<BalanceEntryDB>(conn)
                .map_err(StorageError::from)?;

            let affected = diesel::delete(balance_entries.find(&entry_id))
                .execute(conn)
                .map_err(StorageError::from)?;

            recompute_scopes_tx(conn, &existing.employee_id, existing.date)?;

            Ok(affected)
        })
    }

    fn get_by_id(&self, entry_id: &str) -> Result<BalanceEntry> {
        let mut conn = get_connection(&self.pool)?;

        let entry_db = balance_entries
            .find(entry_id)
            .select(BalanceEntryDB::as_select())
            .first::<BalanceEntryDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(entry_db.into())
    }

    fn list(
        &self,
        employee_filter: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<BalanceEntry>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = balance_entries.into_boxed();
        if let Some(employee) = employee_filter {
            query = query.filter(employee_id.eq(employee.to_string()));
        }
        if let Some(start) = start_date {
            query = query.filter(date.ge(start));
        }
        if let Some(end) = end_date {
            query = query.filter(date.le(end));
        }

        let entries = query
            .select(BalanceEntryDB::as_select())
            .order(date.desc())
            .load::<BalanceEntryDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(entries.into_iter().map(BalanceEntry::from).collect())
    }

    fn recompute_month_balance(
        &self,
        employee: &str,
        target_year: i32,
        target_month: i32,
    ) -> Result<Option<MonthBalance>> {
        let employee = employee.to_string();
        self.pool
            .execute(move |conn| recompute_month_tx(conn, &employee, target_year, target_month))
    }

    fn recompute_year_balance(
        &self,
        employee: &str,
        target_year: i32,
    ) -> Result<Option<YearBalance>> {
        let employee = employee.to_string();
        self.pool
            .execute(move |conn| recompute_year_tx(conn, &employee, target_year))
    }

    fn get_month_balance(
        &self,
        employee: &str,
        target_year: i32,
        target_month: i32,
    ) -> Result<Option<MonthBalance>> {
        let mut conn = get_connection(&self.pool)?;

        let row = month_balances::table
            .filter(month_balances::employee_id.eq(employee))
            .filter(month_balances::year.eq(target_year))
            .filter(month_balances::month.eq(target_month))
            .select(MonthBalanceDB::as_select())
            .first::<MonthBalanceDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(row.map(MonthBalance::from))
    }

    fn get_year_balance(&self, employee: &str, target_year: i32) -> Result<Option<YearBalance>> {
        let mut conn = get_connection(&self.pool)?;

        let row = year_balances::table
            .filter(year_balances::employee_id.eq(employee))
            .filter(year_balances::year.eq(target_year))
            .select(YearBalanceDB::as_select())
            .first::<YearBalanceDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(row.map(YearBalance::from))
    }

    fn list_month_balances(
        &self,
        employee_filter: Option<&str>,
        year_filter: Option<i32>,
    ) -> Result<Vec<MonthBalance>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = month_balances::table.into_boxed();
        if let Some(employee) = employee_filter {
            query = query.filter(month_balances::employee_id.eq(employee.to_string()));
        }
        if let Some(target_year) = year_filter {
            query = query.filter(month_balances::year.eq(target_year));
        }

        let rows = query
            .select(MonthBalanceDB::as_select())
            .order((month_balances::year.desc(), month_balances::month.desc()))
            .load::<MonthBalanceDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(MonthBalance::from).collect())
    }

    fn list_year_balances(
        &self,
        employee_filter: Option<&str>,
        year_filter: Option<i32>,
    ) -> Result<Vec<YearBalance>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = year_balances::table.into_boxed();
        if let Some(employee) = employee_filter {
            query = query.filter(year_balances::employee_id.eq(employee.to_string()));
        }
        if let Some(target_year) = year_filter {
            query = query.filter(year_balances::year.eq(target_year));
        }

        let rows = query
            .select(YearBalanceDB::as_select())
            .order(year_balances::year.desc())
            .load::<YearBalanceDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(YearBalance::from).collect())
    }

    fn set_month_closed(
        &self,
        employee: &str,
        target_year: i32,
        target_month: i32,
        closed: bool,
    ) -> Result<MonthBalance> {
        let employee = employee.to_string();
        self.pool.execute(move |conn| {
            let row = month_balances::table
                .filter(month_balances::employee_id.eq(&employee))
                .filter(month_balances::year.eq(target_year))
                .filter(month_balances::month.eq(target_month))
                .select(MonthBalanceDB::as_select())
                .first::<MonthBalanceDB>(conn)
                .optional()
                .map_err(StorageError::from)?;

            let Some(mut row) = row else {
                return Err(Error::Balance(BalanceError::MonthNotFound {
                    employee_id: employee.clone(),
                    year: target_year,
                    month: target_month,
                }));
            };

            row.is_closed = closed;
            diesel::update(month_balances::table.find(&row.id))
                .set(month_balances::is_closed.eq(closed))
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(row.into())
        })
    }
}
