use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User, UserUpdate};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Service for managing staff users
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    /// Creates a new UserService instance
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn check_username_available(&self, username: &str, exclude_id: Option<&str>) -> Result<()> {
        if let Some(existing) = self.repository.find_by_username(username)? {
            if exclude_id != Some(existing.id.as_str()) {
                return Err(Error::Validation(ValidationError::AlreadyExists(format!(
                    "Username '{}' is already taken",
                    username
                ))));
            }
        }
        Ok(())
    }
}

impl UserServiceTrait for UserService {
    /// Creates a new user after checking username uniqueness
    fn create_user(&self, new_user: NewUser) -> Result<User> {
        debug!("Creating user: {}", new_user.username);
        new_user.validate()?;
        self.check_username_available(&new_user.username, None)?;
        self.repository.create(new_user)
    }

    /// Updates an existing user
    fn update_user(&self, user_update: UserUpdate) -> Result<User> {
        user_update.validate()?;
        self.check_username_available(&user_update.username, user_update.id.as_deref())?;
        self.repository.update(user_update)
    }

    /// Deletes a user by their ID
    fn delete_user(&self, user_id: &str) -> Result<()> {
        self.repository.delete(user_id)?;
        Ok(())
    }

    /// Retrieves a user by their ID
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    /// Lists users with optional filtering by active status
    fn list_users(&self, is_active_filter: Option<bool>) -> Result<Vec<User>> {
        self.repository.list(is_active_filter)
    }

    /// Lists all users
    fn get_all_users(&self) -> Result<Vec<User>> {
        self.repository.list(None)
    }
}
