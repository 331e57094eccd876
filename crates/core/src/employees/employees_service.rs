use log::debug;
use std::sync::Arc;

use super::employees_errors::EmployeeError;
use super::employees_model::{Employee, EmployeeUpdate, NewEmployee};
use super::employees_traits::{EmployeeRepositoryTrait, EmployeeServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing employees
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepositoryTrait>,
}

impl EmployeeService {
    /// Creates a new EmployeeService instance
    pub fn new(repository: Arc<dyn EmployeeRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Rejects the write when the user is already linked to a different
    /// employee record.
    fn check_user_assignment(&self, user_id: &str, exclude_id: Option<&str>) -> Result<()> {
        if let Some(existing) = self.repository.find_by_user_id(user_id)? {
            if exclude_id != Some(existing.id.as_str()) {
                return Err(Error::Employee(EmployeeError::UserAlreadyAssigned(
                    user_id.to_string(),
                )));
            }
        }
        Ok(())
    }
}

impl EmployeeServiceTrait for EmployeeService {
    /// Creates a new employee after checking the user is not yet assigned
    fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee> {
        debug!("Creating employee: {}", new_employee.full_name);
        new_employee.validate()?;
        self.check_user_assignment(&new_employee.user_id, None)?;
        self.repository.create(new_employee)
    }

    /// Updates an existing employee
    fn update_employee(&self, employee_update: EmployeeUpdate) -> Result<Employee> {
        employee_update.validate()?;
        self.check_user_assignment(&employee_update.user_id, employee_update.id.as_deref())?;
        self.repository.update(employee_update)
    }

    /// Deletes an employee by ID
    fn delete_employee(&self, employee_id: &str) -> Result<()> {
        self.repository.delete(employee_id)?;
        Ok(())
    }

    /// Retrieves an employee by ID
    fn get_employee(&self, employee_id: &str) -> Result<Employee> {
        self.repository.get_by_id(employee_id)
    }

    /// Lists all employees
    fn get_all_employees(&self) -> Result<Vec<Employee>> {
        self.repository.list()
    }
}
