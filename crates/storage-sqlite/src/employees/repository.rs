use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use shopledger_core::employees::{Employee, EmployeeRepositoryTrait, EmployeeUpdate, NewEmployee};
use shopledger_core::Result;

use super::model::EmployeeDB;
use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::errors::StorageError;
use crate::schema::employees;
use crate::schema::employees::dsl::*;

/// Repository for managing employee data in the database
pub struct EmployeeRepository {
    pool: Arc<DbPool>,
}

impl EmployeeRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl EmployeeRepositoryTrait for EmployeeRepository {
    fn create(&self, new_employee: NewEmployee) -> Result<Employee> {
        self.pool.execute(move |conn| {
            let mut employee_db: EmployeeDB = new_employee.into();
            if employee_db.id.is_empty() {
                employee_db.id = Uuid::new_v4().to_string();
            }

            diesel::insert_into(employees::table)
                .values(&employee_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(employee_db.into())
        })
    }

    fn update(&self, employee_update: EmployeeUpdate) -> Result<Employee> {
        self.pool.execute(move |conn| {
            let mut employee_db: EmployeeDB = employee_update.into();

            let existing = employees
                .select(EmployeeDB::as_select())
                .find(&employee_db.id)
                .first::<EmployeeDB>(conn)
                .map_err(StorageError::from)?;

            employee_db.created_at = existing.created_at;

            diesel::update(employees.find(&employee_db.id))
                .set(&employee_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(employee_db.into())
        })
    }

    fn delete(&self, employee_id: &str) -> Result<usize> {
        // Ledger entries and statistics rows cascade with the employee.
        let id_to_delete = employee_id.to_string();
        self.pool.execute(move |conn| {
            let affected_rows = diesel::delete(employees.find(id_to_delete))
                .execute(conn)
                .map_err(StorageError::from)?;
            Ok(affected_rows)
        })
    }

    fn get_by_id(&self, employee_id: &str) -> Result<Employee> {
        let mut conn = get_connection(&self.pool)?;

        let employee = employees
            .select(EmployeeDB::as_select())
            .find(employee_id)
            .first::<EmployeeDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(employee.into())
    }

    fn find_by_user_id(&self, user_id_param: &str) -> Result<Option<Employee>> {
        let mut conn = get_connection(&self.pool)?;

        let employee = employees
            .select(EmployeeDB::as_select())
            .filter(user_id.eq(user_id_param))
            .first::<EmployeeDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(employee.map(Employee::from))
    }

    fn list(&self) -> Result<Vec<Employee>> {
        let mut conn = get_connection(&self.pool)?;

        let results = employees
            .select(EmployeeDB::as_select())
            .order(full_name.asc())
            .load::<EmployeeDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Employee::from).collect())
    }
}
