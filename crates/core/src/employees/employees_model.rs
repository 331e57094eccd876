//! Employee domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{errors::ValidationError, Error, Result};

/// How an employee's pay is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SalaryType {
    /// Fixed monthly salary
    #[default]
    Fixed,
    /// Paid per hour worked
    Hourly,
    /// Paid per unit produced
    Piecework,
}

impl SalaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryType::Fixed => "fixed",
            SalaryType::Hourly => "hourly",
            SalaryType::Piecework => "piecework",
        }
    }
}

impl FromStr for SalaryType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(SalaryType::Fixed),
            "hourly" => Ok(SalaryType::Hourly),
            "piecework" => Ok(SalaryType::Piecework),
            _ => Err(format!("Unknown salary type: {}", s)),
        }
    }
}

/// Domain model representing an employee.
///
/// Each employee is linked to exactly one staff user; a user may not be
/// linked to more than one employee.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub user_id: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub position: String,
    pub salary_type: SalaryType,
    pub base_salary: Decimal,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub position: String,
    pub salary_type: SalaryType,
    /// Missing salary is coerced to zero at save
    pub base_salary: Option<Decimal>,
}

impl NewEmployee {
    /// Validates the new employee data.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        if self.full_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Employee full name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub id: Option<String>,
    pub user_id: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub position: String,
    pub salary_type: SalaryType,
    pub base_salary: Option<Decimal>,
}

impl EmployeeUpdate {
    /// Validates the employee update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Employee ID is required for updates".to_string(),
            )));
        }
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        if self.full_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Employee full name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
