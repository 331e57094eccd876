//! Database model for employees.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use shopledger_core::employees::{Employee, EmployeeUpdate, NewEmployee, SalaryType};

use crate::utils::{decimal_to_db, parse_decimal};

/// Database model for employees
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
#[diesel(table_name = crate::schema::employees)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmployeeDB {
    pub id: String,
    pub user_id: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub position: String,
    pub salary_type: String,
    pub base_salary: String,
    pub created_at: NaiveDateTime,
}

fn parse_salary_type(value: &str) -> SalaryType {
    value.parse().unwrap_or_else(|e: String| {
        log::error!("{}. Falling back to the default.", e);
        SalaryType::default()
    })
}

// Conversion implementations
impl From<EmployeeDB> for Employee {
    fn from(db: EmployeeDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            full_name: db.full_name,
            phone_number: db.phone_number,
            position: db.position,
            salary_type: parse_salary_type(&db.salary_type),
            base_salary: parse_decimal(&db.base_salary, "base_salary"),
            created_at: db.created_at,
        }
    }
}

impl From<NewEmployee> for EmployeeDB {
    fn from(domain: NewEmployee) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            user_id: domain.user_id,
            full_name: domain.full_name,
            phone_number: domain.phone_number,
            position: domain.position,
            salary_type: domain.salary_type.as_str().to_string(),
            base_salary: decimal_to_db(domain.base_salary.unwrap_or_default()),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<EmployeeUpdate> for EmployeeDB {
    fn from(domain: EmployeeUpdate) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            user_id: domain.user_id,
            full_name: domain.full_name,
            phone_number: domain.phone_number,
            position: domain.position,
            salary_type: domain.salary_type.as_str().to_string(),
            base_salary: decimal_to_db(domain.base_salary.unwrap_or_default()),
            created_at: NaiveDateTime::default(), // This will be filled from existing record
        }
    }
}
