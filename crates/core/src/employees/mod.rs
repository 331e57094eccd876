//! Employees module - domain models, services, and traits.

mod employees_errors;
mod employees_model;
mod employees_service;
mod employees_traits;

#[cfg(test)]
mod employees_model_tests;


// Re-export the public interface
pub use employees_errors::EmployeeError;
pub use employees_model::{Employee, EmployeeUpdate, NewEmployee, SalaryType};
pub use employees_service::EmployeeService;
pub use employees_traits::{EmployeeRepositoryTrait, EmployeeServiceTrait};
