//! Integration tests for the balance ledger and its derived statistics.
//!
//! These exercise the invariant that month and year rows always mirror
//! the ledger: every write rebuilds the affected scopes in the same
//! transaction, scopes without activity keep no row, and the closed
//! flag survives recomputation.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use shopledger_core::balances::{
    BalanceEntryUpdate, BalanceError, BalanceRepositoryTrait, NewBalanceEntry,
};
use shopledger_core::Error;
use shopledger_storage_sqlite::balances::BalanceRepository;

mod common;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn new_entry(
    employee_id: &str,
    entry_date: NaiveDate,
    earned: rust_decimal::Decimal,
    paid: rust_decimal::Decimal,
) -> NewBalanceEntry {
    NewBalanceEntry {
        id: None,
        employee_id: employee_id.to_string(),
        date: entry_date,
        earned_amount: Some(earned),
        paid_amount: Some(paid),
        description: None,
    }
}

#[test]
fn test_create_entry_builds_month_and_year_statistics() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "ayna");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    repository
        .create(new_entry(&employee.id, date(2024, 3, 5), dec!(1000), dec!(400)))
        .expect("Failed to create entry");

    let month = repository
        .get_month_balance(&employee.id, 2024, 3)
        .expect("Failed to read month balance")
        .expect("Month balance should exist");
    assert_eq!(month.total_earned, dec!(1000));
    assert_eq!(month.total_paid, dec!(400));
    assert_eq!(month.net_balance, dec!(600));
    assert!(!month.is_closed);

    let year = repository
        .get_year_balance(&employee.id, 2024)
        .expect("Failed to read year balance")
        .expect("Year balance should exist");
    assert_eq!(year.total_earned, dec!(1000));
    assert_eq!(year.total_paid, dec!(400));
    assert_eq!(year.net_balance, dec!(600));
}

#[test]
fn test_entries_accumulate_within_scope() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "merdan");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    repository
        .create(new_entry(&employee.id, date(2024, 3, 5), dec!(1000), dec!(400)))
        .expect("Failed to create first entry");
    repository
        .create(new_entry(&employee.id, date(2024, 3, 6), dec!(250.50), dec!(0)))
        .expect("Failed to create second entry");
    // Another month of the same year only feeds the year scope.
    repository
        .create(new_entry(&employee.id, date(2024, 4, 1), dec!(100), dec!(100)))
        .expect("Failed to create third entry");

    let march = repository
        .get_month_balance(&employee.id, 2024, 3)
        .unwrap()
        .expect("March balance should exist");
    assert_eq!(march.total_earned, dec!(1250.50));
    assert_eq!(march.total_paid, dec!(400));
    assert_eq!(march.net_balance, dec!(850.50));

    let year = repository
        .get_year_balance(&employee.id, 2024)
        .unwrap()
        .expect("Year balance should exist");
    assert_eq!(year.total_earned, dec!(1350.50));
    assert_eq!(year.total_paid, dec!(500));
}

#[test]
fn test_deleting_last_entry_removes_statistics_rows() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "jeren");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    let entry = repository
        .create(new_entry(&employee.id, date(2024, 5, 10), dec!(300), dec!(50)))
        .expect("Failed to create entry");

    let deleted = repository.delete(&entry.id).expect("Failed to delete entry");
    assert_eq!(deleted, 1);

    assert!(repository
        .get_month_balance(&employee.id, 2024, 5)
        .unwrap()
        .is_none());
    assert!(repository.get_year_balance(&employee.id, 2024).unwrap().is_none());
}

#[test]
fn test_zero_amount_entry_keeps_no_statistics_row() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "selbi");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    repository
        .create(new_entry(&employee.id, date(2024, 6, 1), dec!(0), dec!(0)))
        .expect("Failed to create entry");

    assert!(repository
        .get_month_balance(&employee.id, 2024, 6)
        .unwrap()
        .is_none());
    assert!(repository.get_year_balance(&employee.id, 2024).unwrap().is_none());
}

#[test]
fn test_recompute_is_idempotent() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "gozel");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    repository
        .create(new_entry(&employee.id, date(2024, 7, 2), dec!(800), dec!(200)))
        .expect("Failed to create entry");

    let first = repository
        .recompute_month_balance(&employee.id, 2024, 7)
        .unwrap()
        .expect("Recompute should return a row");
    let second = repository
        .recompute_month_balance(&employee.id, 2024, 7)
        .unwrap()
        .expect("Recompute should return a row");

    assert_eq!(first.total_earned, second.total_earned);
    assert_eq!(first.total_paid, second.total_paid);
    assert_eq!(first.net_balance, second.net_balance);

    let stored = repository
        .list_month_balances(Some(&employee.id), Some(2024))
        .unwrap();
    assert_eq!(stored.len(), 1, "Recompute must not duplicate rows");
}

#[test]
fn test_moving_entry_across_months_updates_all_scopes() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "oraz");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    let entry = repository
        .create(new_entry(&employee.id, date(2024, 1, 15), dec!(500), dec!(0)))
        .expect("Failed to create entry");

    repository
        .update(BalanceEntryUpdate {
            id: Some(entry.id.clone()),
            employee_id: employee.id.clone(),
            date: date(2024, 2, 15),
            earned_amount: Some(dec!(500)),
            paid_amount: Some(dec!(0)),
            description: None,
        })
        .expect("Failed to move entry");

    assert!(
        repository
            .get_month_balance(&employee.id, 2024, 1)
            .unwrap()
            .is_none(),
        "Vacated month must lose its row"
    );
    let february = repository
        .get_month_balance(&employee.id, 2024, 2)
        .unwrap()
        .expect("Target month should gain a row");
    assert_eq!(february.total_earned, dec!(500));

    let year = repository
        .get_year_balance(&employee.id, 2024)
        .unwrap()
        .expect("Year balance should survive the move");
    assert_eq!(year.total_earned, dec!(500));
}

#[test]
fn test_moving_entry_across_years_updates_both_year_rows() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "bahar");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    let entry = repository
        .create(new_entry(&employee.id, date(2023, 12, 30), dec!(700), dec!(100)))
        .expect("Failed to create entry");

    repository
        .update(BalanceEntryUpdate {
            id: Some(entry.id.clone()),
            employee_id: employee.id.clone(),
            date: date(2024, 1, 2),
            earned_amount: Some(dec!(700)),
            paid_amount: Some(dec!(100)),
            description: None,
        })
        .expect("Failed to move entry");

    assert!(repository.get_year_balance(&employee.id, 2023).unwrap().is_none());
    let year = repository
        .get_year_balance(&employee.id, 2024)
        .unwrap()
        .expect("New year should gain a row");
    assert_eq!(year.net_balance, dec!(600));
}

#[test]
fn test_closed_flag_survives_recompute() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "mahri");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    repository
        .create(new_entry(&employee.id, date(2024, 8, 1), dec!(100), dec!(0)))
        .expect("Failed to create entry");

    let closed = repository
        .set_month_closed(&employee.id, 2024, 8, true)
        .expect("Failed to close month");
    assert!(closed.is_closed);

    // A later write in the month rebuilds the row but keeps the flag.
    repository
        .create(new_entry(&employee.id, date(2024, 8, 20), dec!(50), dec!(0)))
        .expect("Failed to create second entry");

    let month = repository
        .get_month_balance(&employee.id, 2024, 8)
        .unwrap()
        .expect("Month balance should exist");
    assert!(month.is_closed, "Closed flag must survive the rewrite");
    assert_eq!(month.total_earned, dec!(150));
}

#[test]
fn test_set_month_closed_requires_existing_row() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "akmyrat");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    let result = repository.set_month_closed(&employee.id, 2024, 9, true);
    match result {
        Err(Error::Balance(BalanceError::MonthNotFound { year, month, .. })) => {
            assert_eq!(year, 2024);
            assert_eq!(month, 9);
        }
        other => panic!("Expected MonthNotFound, got {:?}", other),
    }
}

#[test]
fn test_duplicate_entry_per_day_is_rejected() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "jemal");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    repository
        .create(new_entry(&employee.id, date(2024, 10, 3), dec!(100), dec!(0)))
        .expect("Failed to create entry");

    let result = repository.create(new_entry(
        &employee.id,
        date(2024, 10, 3),
        dec!(999),
        dec!(0),
    ));
    match result {
        Err(Error::Balance(BalanceError::DuplicateEntry { date: dup_date, .. })) => {
            assert_eq!(dup_date, date(2024, 10, 3));
        }
        other => panic!("Expected DuplicateEntry, got {:?}", other),
    }

    // The rejected write must not have touched the ledger or the totals.
    let entries = repository.list(Some(&employee.id), None, None).unwrap();
    assert_eq!(entries.len(), 1);
    let month = repository
        .get_month_balance(&employee.id, 2024, 10)
        .unwrap()
        .expect("Month balance should exist");
    assert_eq!(month.total_earned, dec!(100));
}

#[test]
fn test_update_to_occupied_day_is_rejected() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "shirin");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    repository
        .create(new_entry(&employee.id, date(2024, 11, 1), dec!(100), dec!(0)))
        .expect("Failed to create first entry");
    let second = repository
        .create(new_entry(&employee.id, date(2024, 11, 2), dec!(200), dec!(0)))
        .expect("Failed to create second entry");

    let result = repository.update(BalanceEntryUpdate {
        id: Some(second.id.clone()),
        employee_id: employee.id.clone(),
        date: date(2024, 11, 1),
        earned_amount: Some(dec!(200)),
        paid_amount: Some(dec!(0)),
        description: None,
    });
    assert!(matches!(
        result,
        Err(Error::Balance(BalanceError::DuplicateEntry { .. }))
    ));
}

#[test]
fn test_list_filters_by_employee_and_range() {
    let (pool, _temp_dir) = common::setup_db();
    let first = common::create_test_employee(&pool, "aman");
    let second = common::create_test_employee(&pool, "begench");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    repository
        .create(new_entry(&first.id, date(2024, 1, 10), dec!(100), dec!(0)))
        .unwrap();
    repository
        .create(new_entry(&first.id, date(2024, 2, 10), dec!(200), dec!(0)))
        .unwrap();
    repository
        .create(new_entry(&second.id, date(2024, 1, 20), dec!(300), dec!(0)))
        .unwrap();

    let all = repository.list(None, None, None).unwrap();
    assert_eq!(all.len(), 3);

    let first_only = repository.list(Some(&first.id), None, None).unwrap();
    assert_eq!(first_only.len(), 2);

    let january = repository
        .list(None, Some(date(2024, 1, 1)), Some(date(2024, 1, 31)))
        .unwrap();
    assert_eq!(january.len(), 2);
}

#[test]
fn test_deleting_employee_cascades_ledger_and_statistics() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "kemal");
    let repository = BalanceRepository::new(Arc::clone(&pool));

    repository
        .create(new_entry(&employee.id, date(2024, 4, 4), dec!(400), dec!(100)))
        .expect("Failed to create entry");

    let employee_repository =
        shopledger_storage_sqlite::employees::EmployeeRepository::new(Arc::clone(&pool));
    shopledger_core::employees::EmployeeRepositoryTrait::delete(&employee_repository, &employee.id)
        .expect("Failed to delete employee");

    assert!(repository.list(Some(&employee.id), None, None).unwrap().is_empty());
    assert!(repository
        .list_month_balances(Some(&employee.id), None)
        .unwrap()
        .is_empty());
    assert!(repository
        .list_year_balances(Some(&employee.id), None)
        .unwrap()
        .is_empty());
}
