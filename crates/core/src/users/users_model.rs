//! Staff user domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a staff user account.
///
/// Authentication and sessions are handled by an external identity
/// provider; this record carries the profile and role flags referenced
/// by audit fields and employee links.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub is_worker: bool,
    pub is_manager: bool,
    pub is_active: bool,
    pub date_joined: NaiveDateTime,
}

impl User {
    /// First and last name joined, falling back to the username when both
    /// are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Input model for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub is_worker: bool,
    pub is_manager: bool,
    pub is_active: bool,
}

impl NewUser {
    /// Validates the new user data.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Username cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub id: Option<String>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub is_worker: bool,
    pub is_manager: bool,
    pub is_active: bool,
}

impl UserUpdate {
    /// Validates the user update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "User ID is required for updates".to_string(),
            )));
        }
        if self.username.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Username cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
