//! Database model for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use shopledger_core::users::{NewUser, User, UserUpdate};

/// Database model for users
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
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
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

// Conversion implementations
impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            username: db.username,
            first_name: db.first_name,
            last_name: db.last_name,
            email: db.email,
            phone_number: db.phone_number,
            is_worker: db.is_worker,
            is_manager: db.is_manager,
            is_active: db.is_active,
            date_joined: db.date_joined,
        }
    }
}

impl From<NewUser> for UserDB {
    fn from(domain: NewUser) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            username: domain.username,
            first_name: domain.first_name,
            last_name: domain.last_name,
            email: domain.email,
            phone_number: domain.phone_number,
            is_worker: domain.is_worker,
            is_manager: domain.is_manager,
            is_active: domain.is_active,
            date_joined: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<UserUpdate> for UserDB {
    fn from(domain: UserUpdate) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            username: domain.username,
            first_name: domain.first_name,
            last_name: domain.last_name,
            email: domain.email,
            phone_number: domain.phone_number,
            is_worker: domain.is_worker,
            is_manager: domain.is_manager,
            is_active: domain.is_active,
            date_joined: NaiveDateTime::default(), // This will be filled from existing record
        }
    }
}
