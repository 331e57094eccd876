//! Database models for the balance ledger and its statistics rows.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use shopledger_core::balances::{
    BalanceEntry, BalanceEntryUpdate, MonthBalance, NewBalanceEntry, YearBalance,
};

use crate::utils::{decimal_to_db, parse_decimal};

/// Database model for balance ledger entries
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
#[diesel(table_name = crate::schema::balance_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BalanceEntryDB {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub earned_amount: String,
    pub paid_amount: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for monthly balance statistics
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
#[diesel(table_name = crate::schema::month_balances)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MonthBalanceDB {
    pub id: String,
    pub employee_id: String,
    pub year: i32,
    pub month: i32,
    pub total_earned: String,
    pub total_paid: String,
    pub net_balance: String,
    pub is_closed: bool,
}

/// Database model for yearly balance statistics
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
#[diesel(table_name = crate::schema::year_balances)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct YearBalanceDB {
    pub id: String,
    pub employee_id: String,
    pub year: i32,
    pub total_earned: String,
    pub total_paid: String,
    pub net_balance: String,
}

// Conversion implementations

impl From<BalanceEntryDB> for BalanceEntry {
    fn from(db: BalanceEntryDB) -> Self {
        Self {
            id: db.id,
            employee_id: db.employee_id,
            date: db.date,
            earned_amount: parse_decimal(&db.earned_amount, "earned_amount"),
            paid_amount: parse_decimal(&db.paid_amount, "paid_amount"),
            description: db.description,
            created_at: db.created_at,
        }
    }
}

impl From<NewBalanceEntry> for BalanceEntryDB {
    fn from(domain: NewBalanceEntry) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            employee_id: domain.employee_id,
            date: domain.date,
            earned_amount: decimal_to_db(domain.earned_amount.unwrap_or_default()),
            paid_amount: decimal_to_db(domain.paid_amount.unwrap_or_default()),
            description: domain.description,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<BalanceEntryUpdate> for BalanceEntryDB {
    fn from(domain: BalanceEntryUpdate) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            employee_id: domain.employee_id,
            date: domain.date,
            earned_amount: decimal_to_db(domain.earned_amount.unwrap_or_default()),
            paid_amount: decimal_to_db(domain.paid_amount.unwrap_or_default()),
            description: domain.description,
            created_at: NaiveDateTime::default(), // This will be filled from existing record
        }
    }
}

impl From<MonthBalanceDB> for MonthBalance {
    fn from(db: MonthBalanceDB) -> Self {
        Self {
            id: db.id,
            employee_id: db.employee_id,
            year: db.year,
            month: db.month,
            total_earned: parse_decimal(&db.total_earned, "total_earned"),
            total_paid: parse_decimal(&db.total_paid, "total_paid"),
            net_balance: parse_decimal(&db.net_balance, "net_balance"),
            is_closed: db.is_closed,
        }
    }
}

impl From<MonthBalance> for MonthBalanceDB {
    fn from(domain: MonthBalance) -> Self {
        Self {
            id: domain.id,
            employee_id: domain.employee_id,
            year: domain.year,
            month: domain.month,
            total_earned: decimal_to_db(domain.total_earned),
            total_paid: decimal_to_db(domain.total_paid),
            net_balance: decimal_to_db(domain.net_balance),
            is_closed: domain.is_closed,
        }
    }
}

impl From<YearBalanceDB> for YearBalance {
    fn from(db: YearBalanceDB) -> Self {
        Self {
            id: db.id,
            employee_id: db.employee_id,
            year: db.year,
            total_earned: parse_decimal(&db.total_earned, "total_earned"),
            total_paid: parse_decimal(&db.total_paid, "total_paid"),
            net_balance: parse_decimal(&db.net_balance, "net_balance"),
        }
    }
}

impl From<YearBalance> for YearBalanceDB {
    fn from(domain: YearBalance) -> Self {
        Self {
            id: domain.id,
            employee_id: domain.employee_id,
            year: domain.year,
            total_earned: decimal_to_db(domain.total_earned),
            total_paid: decimal_to_db(domain.total_paid),
            net_balance: decimal_to_db(domain.net_balance),
        }
    }
}
