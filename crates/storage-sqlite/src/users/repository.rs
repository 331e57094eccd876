use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use shopledger_core::users::{NewUser, User, UserRepositoryTrait, UserUpdate};
use shopledger_core::Result;

use super::model::UserDB;
use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::errors::StorageError;
use crate::schema::users;
use crate::schema::users::dsl::*;

/// Repository for managing user data in the database
pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl UserRepositoryTrait for UserRepository {
    fn create(&self, new_user: NewUser) -> Result<User> {
        self.pool.execute(move |conn| {
            let mut user_db: UserDB = new_user.into();
            if user_db.id.is_empty() {
                user_db.id = Uuid::new_v4().to_string();
            }

            diesel::insert_into(users::table)
                .values(&user_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(user_db.into())
        })
    }

    fn update(&self, user_update: UserUpdate) -> Result<User> {
        self.pool.execute(move |conn| {
            let mut user_db: UserDB = user_update.into();

            let existing = users
                .select(UserDB::as_select())
                .find(&user_db.id)
                .first::<UserDB>(conn)
                .map_err(StorageError::from)?;

            user_db.date_joined = existing.date_joined;

            diesel::update(users.find(&user_db.id))
                .set(&user_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(user_db.into())
        })
    }

    fn delete(&self, user_id: &str) -> Result<usize> {
        let id_to_delete = user_id.to_string();
        self.pool.execute(move |conn| {
            let affected_rows = diesel::delete(users.find(id_to_delete))
                .execute(conn)
                .map_err(StorageError::from)?;
            Ok(affected_rows)
        })
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        let user = users
            .select(UserDB::as_select())
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(user.into())
    }

    fn find_by_username(&self, username_param: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let user = users
            .select(UserDB::as_select())
            .filter(username.eq(username_param))
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(user.map(User::from))
    }

    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<User>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = users::table.into_boxed();

        if let Some(active) = is_active_filter {
            query = query.filter(is_active.eq(active));
        }

        let results = query
            .select(UserDB::as_select())
            .order(username.asc())
            .load::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(User::from).collect())
    }
}
