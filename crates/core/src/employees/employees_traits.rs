//! Employee repository and service traits.

use super::employees_model::{Employee, EmployeeUpdate, NewEmployee};
use crate::errors::Result;

/// Trait defining the contract for Employee repository operations.
pub trait EmployeeRepositoryTrait: Send + Sync {
    /// Creates a new employee.
    fn create(&self, new_employee: NewEmployee) -> Result<Employee>;

    /// Updates an existing employee.
    fn update(&self, employee_update: EmployeeUpdate) -> Result<Employee>;

    /// Deletes an employee by ID.
    ///
    /// Deleting an employee also removes their balance entries and the
    /// statistics derived from them.
    fn delete(&self, employee_id: &str) -> Result<usize>;

    /// Retrieves an employee by ID.
    fn get_by_id(&self, employee_id: &str) -> Result<Employee>;

    /// Looks up the employee linked to a user, if any.
    fn find_by_user_id(&self, user_id: &str) -> Result<Option<Employee>>;

    /// Lists all employees.
    fn list(&self) -> Result<Vec<Employee>>;
}

/// Trait defining the contract for Employee service operations.
pub trait EmployeeServiceTrait: Send + Sync {
    /// Creates a new employee with business validation.
    fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee>;

    /// Updates an existing employee with business validation.
    fn update_employee(&self, employee_update: EmployeeUpdate) -> Result<Employee>;

    /// Deletes an employee.
    fn delete_employee(&self, employee_id: &str) -> Result<()>;

    /// Retrieves an employee by ID.
    fn get_employee(&self, employee_id: &str) -> Result<Employee>;

    /// Lists all employees.
    fn get_all_employees(&self) -> Result<Vec<Employee>>;
}
