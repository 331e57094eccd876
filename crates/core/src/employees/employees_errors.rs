use thiserror::Error;

/// Custom error type for employee-related operations
#[derive(Debug, Error)]
pub enum EmployeeError {
    /// The user is already linked to another employee record.
    #[error("User {0} is already assigned to another employee")]
    UserAlreadyAssigned(String),
}
