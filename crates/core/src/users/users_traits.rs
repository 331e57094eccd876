//! User repository and service traits.
//!
//! These traits define the contract for user operations without any
//! database-specific types, allowing for different storage implementations.

use super::users_model::{NewUser, User, UserUpdate};
use crate::errors::Result;

/// Trait defining the contract for User repository operations.
pub trait UserRepositoryTrait: Send + Sync {
    /// Creates a new user.
    fn create(&self, new_user: NewUser) -> Result<User>;

    /// Updates an existing user.
    fn update(&self, user_update: UserUpdate) -> Result<User>;

    /// Deletes a user by their ID.
    ///
    /// Returns the number of deleted records.
    fn delete(&self, user_id: &str) -> Result<usize>;

    /// Retrieves a user by their ID.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Looks up a user by username.
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Lists users, optionally filtered by active status.
    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<User>>;
}

/// Trait defining the contract for User service operations.
pub trait UserServiceTrait: Send + Sync {
    /// Creates a new user with business validation.
    fn create_user(&self, new_user: NewUser) -> Result<User>;

    /// Updates an existing user with business validation.
    fn update_user(&self, user_update: UserUpdate) -> Result<User>;

    /// Deletes a user.
    fn delete_user(&self, user_id: &str) -> Result<()>;

    /// Retrieves a user by ID.
    fn get_user(&self, user_id: &str) -> Result<User>;

    /// Lists users with an optional active-status filter.
    fn list_users(&self, is_active_filter: Option<bool>) -> Result<Vec<User>>;

    /// Gets all users regardless of status.
    fn get_all_users(&self) -> Result<Vec<User>>;
}
