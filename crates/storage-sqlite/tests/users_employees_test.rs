//! Integration tests for user accounts and employee records.

use std::sync::Arc;

use rust_decimal_macros::dec;

use shopledger_core::employees::{
    Employee, EmployeeRepositoryTrait, NewEmployee, SalaryType,
};
use shopledger_core::errors::DatabaseError;
use shopledger_core::users::{NewUser, UserRepositoryTrait, UserUpdate};
use shopledger_core::Error;
use shopledger_storage_sqlite::employees::EmployeeRepository;
use shopledger_storage_sqlite::users::UserRepository;

mod common;

#[test]
fn test_create_and_find_user() {
    let (pool, _temp_dir) = common::setup_db();
    let repository = UserRepository::new(Arc::clone(&pool));

    let user = common::create_test_user(&pool, "guncha");
    assert!(!user.id.is_empty());

    let found = repository
        .find_by_username("guncha")
        .expect("Lookup failed")
        .expect("User should be found");
    assert_eq!(found.id, user.id);
    assert!(found.is_active);

    assert!(repository.find_by_username("nobody").unwrap().is_none());
}

#[test]
fn test_username_must_be_unique() {
    let (pool, _temp_dir) = common::setup_db();
    let repository = UserRepository::new(Arc::clone(&pool));

    common::create_test_user(&pool, "guncha");

    let duplicate = repository.create(NewUser {
        id: None,
        username: "guncha".to_string(),
        first_name: "Other".to_string(),
        last_name: "Person".to_string(),
        email: "other@example.com".to_string(),
        phone_number: None,
        is_worker: false,
        is_manager: true,
        is_active: true,
    });
    assert!(matches!(
        duplicate,
        Err(Error::Database(DatabaseError::UniqueViolation(_)))
    ));
}

#[test]
fn test_update_user_preserves_join_date() {
    let (pool, _temp_dir) = common::setup_db();
    let repository = UserRepository::new(Arc::clone(&pool));

    let user = common::create_test_user(&pool, "maya");

    let updated = repository
        .update(UserUpdate {
            id: Some(user.id.clone()),
            username: "maya".to_string(),
            first_name: "Maya".to_string(),
            last_name: "Orazova".to_string(),
            email: "maya@example.com".to_string(),
            phone_number: Some("+99312345678".to_string()),
            is_worker: true,
            is_manager: true,
            is_active: true,
        })
        .expect("Failed to update user");

    assert_eq!(updated.last_name, "Orazova");
    assert_eq!(updated.date_joined, user.date_joined);
}

#[test]
fn test_list_users_by_active_flag() {
    let (pool, _temp_dir) = common::setup_db();
    let repository = UserRepository::new(Arc::clone(&pool));

    let active = common::create_test_user(&pool, "active");
    let retired = common::create_test_user(&pool, "retired");
    repository
        .update(UserUpdate {
            id: Some(retired.id.clone()),
            username: retired.username.clone(),
            first_name: retired.first_name.clone(),
            last_name: retired.last_name.clone(),
            email: retired.email.clone(),
            phone_number: None,
            is_worker: true,
            is_manager: false,
            is_active: false,
        })
        .unwrap();

    let everyone = repository.list(None).unwrap();
    assert_eq!(everyone.len(), 2);

    let only_active = repository.list(Some(true)).unwrap();
    assert_eq!(only_active.len(), 1);
    assert_eq!(only_active[0].id, active.id);

    let only_inactive = repository.list(Some(false)).unwrap();
    assert_eq!(only_inactive.len(), 1);
}

#[test]
fn test_employee_links_to_one_user() {
    let (pool, _temp_dir) = common::setup_db();
    let user = common::create_test_user(&pool, "batyr");
    let repository = EmployeeRepository::new(Arc::clone(&pool));

    let employee = repository
        .create(NewEmployee {
            id: None,
            user_id: user.id.clone(),
            full_name: "Batyr Charyev".to_string(),
            phone_number: None,
            position: "baker".to_string(),
            salary_type: SalaryType::Hourly,
            base_salary: Some(dec!(15.50)),
        })
        .expect("Failed to create employee");
    assert_eq!(employee.salary_type, SalaryType::Hourly);
    assert_eq!(employee.base_salary, dec!(15.50));

    let found = repository
        .find_by_user_id(&user.id)
        .unwrap()
        .expect("Employee should be found by user");
    assert_eq!(found.id, employee.id);

    // One employee per user account.
    let second = repository.create(NewEmployee {
        id: None,
        user_id: user.id.clone(),
        full_name: "Someone Else".to_string(),
        phone_number: None,
        position: "helper".to_string(),
        salary_type: SalaryType::Fixed,
        base_salary: None,
    });
    assert!(matches!(
        second,
        Err(Error::Database(DatabaseError::UniqueViolation(_)))
    ));
}

#[test]
fn test_deleting_user_cascades_employee() {
    let (pool, _temp_dir) = common::setup_db();
    let employee: Employee = common::create_test_employee(&pool, "sona");

    let user_repository = UserRepository::new(Arc::clone(&pool));
    let employee_repository = EmployeeRepository::new(Arc::clone(&pool));

    user_repository
        .delete(&employee.user_id)
        .expect("Failed to delete user");

    assert!(matches!(
        employee_repository.get_by_id(&employee.id),
        Err(Error::Database(DatabaseError::NotFound(_)))
    ));
}

#[test]
fn test_missing_salary_defaults_to_zero() {
    let (pool, _temp_dir) = common::setup_db();
    let employee = common::create_test_employee(&pool, "nury");
    assert_eq!(employee.base_salary, dec!(0));
    assert_eq!(employee.salary_type, SalaryType::Fixed);
}
