use std::sync::Arc;

use tempfile::TempDir;

use shopledger_core::employees::{Employee, EmployeeRepositoryTrait, NewEmployee, SalaryType};
use shopledger_core::users::{NewUser, User, UserRepositoryTrait};
use shopledger_storage_sqlite::employees::EmployeeRepository;
use shopledger_storage_sqlite::users::UserRepository;
use shopledger_storage_sqlite::{create_pool, init, run_migrations, DbPool};

/// Creates a migrated database in a temp directory.
///
/// The `TempDir` must be kept alive for the duration of the test, the
/// database file is removed with it.
pub fn setup_db() -> (Arc<DbPool>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let app_data_dir = temp_dir.path().to_string_lossy().to_string();

    let db_path = init(&app_data_dir).expect("Failed to initialize database");
    let pool = create_pool(&db_path).expect("Failed to create database pool");
    run_migrations(&pool).expect("Failed to run migrations");

    (pool, temp_dir)
}

#[allow(dead_code)]
pub fn create_test_user(pool: &Arc<DbPool>, username: &str) -> User {
    let repository = UserRepository::new(Arc::clone(pool));
    repository
        .create(NewUser {
            id: None,
            username: username.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: format!("{}@example.com", username),
            phone_number: None,
            is_worker: true,
            is_manager: false,
            is_active: true,
        })
        .expect("Failed to create test user")
}

#[allow(dead_code)]
pub fn create_test_employee(pool: &Arc<DbPool>, username: &str) -> Employee {
    let user = create_test_user(pool, username);
    let repository = EmployeeRepository::new(Arc::clone(pool));
    repository
        .create(NewEmployee {
            id: None,
            user_id: user.id,
            full_name: format!("Employee {}", username),
            phone_number: None,
            position: "worker".to_string(),
            salary_type: SalaryType::Fixed,
            base_salary: None,
        })
        .expect("Failed to create test employee")
}
