//! Database models for cashflow records and derived monthly totals.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use shopledger_core::finance::{
    CashflowRecord, CashflowRecordUpdate, MonthlyCashflow, NewCashflowRecord,
};

use crate::utils::{decimal_to_db, parse_decimal};

/// Database model for daily cashflow records
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::cashflow_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CashflowRecordDB {
    pub id: String,
    pub date: NaiveDate,
    pub income_amount: String,
    pub expense_amount: String,
    pub description: Option<String>,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for derived monthly cashflow rows
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::monthly_cashflows)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MonthlyCashflowDB {
    pub id: String,
    pub year: i32,
    pub month: i32,
    pub total_income: String,
    pub total_expense: String,
    pub net_profit: String,
}

// Conversion implementations

impl From<CashflowRecordDB> for CashflowRecord {
    fn from(db: CashflowRecordDB) -> Self {
        Self {
            id: db.id,
            date: db.date,
            income_amount: parse_decimal(&db.income_amount, "income_amount"),
            expense_amount: parse_decimal(&db.expense_amount, "expense_amount"),
            description: db.description,
            created_by: db.created_by,
            created_at: db.created_at,
        }
    }
}

impl From<NewCashflowRecord> for CashflowRecordDB {
    fn from(domain: NewCashflowRecord) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            date: domain.date,
            income_amount: decimal_to_db(domain.income_amount.unwrap_or_default()),
            expense_amount: decimal_to_db(domain.expense_amount.unwrap_or_default()),
            description: domain.description,
            created_by: domain.created_by,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<CashflowRecordUpdate> for CashflowRecordDB {
    fn from(domain: CashflowRecordUpdate) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            date: domain.date,
            income_amount: decimal_to_db(domain.income_amount.unwrap_or_default()),
            expense_amount: decimal_to_db(domain.expense_amount.unwrap_or_default()),
            description: domain.description,
            created_by: None, // This will be filled from existing record
            created_at: NaiveDateTime::default(), // This will be filled from existing record
        }
    }
}

impl From<MonthlyCashflowDB> for MonthlyCashflow {
    fn from(db: MonthlyCashflowDB) -> Self {
        Self {
            id: db.id,
            year: db.year,
            month: db.month,
            total_income: parse_decimal(&db.total_income, "total_income"),
            total_expense: parse_decimal(&db.total_expense, "total_expense"),
            net_profit: parse_decimal(&db.net_profit, "net_profit"),
        }
    }
}

impl From<MonthlyCashflow> for MonthlyCashflowDB {
    fn from(domain: MonthlyCashflow) -> Self {
        Self {
            id: domain.id,
            year: domain.year,
            month: domain.month,
            total_income: decimal_to_db(domain.total_income),
            total_expense: decimal_to_db(domain.total_expense),
            net_profit: decimal_to_db(domain.net_profit),
        }
    }
}
