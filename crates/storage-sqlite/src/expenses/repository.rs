use std::sync::Arc;

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use rust_decimal::Decimal;
use uuid::Uuid;

use shopledger_core::errors::ValidationError;
use shopledger_core::expenses::{
    Expense, ExpenseDetails, ExpenseRepositoryTrait, ExpenseUpdate, FoodItem, FoodProduct,
    NewExpense, NewFoodItem, NewFoodProduct, NewRawItem, NewRawMaterial, RawItem, RawMaterial,
};
use shopledger_core::{Error, Result};

use super::model::{ExpenseDB, FoodItemDB, FoodProductDB, RawItemDB, RawMaterialDB};
use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::errors::StorageError;
use crate::schema::{expenses, food_items, food_products, raw_items, raw_materials};
use crate::utils::decimal_to_db;

/// Repository for expense catalogs, expense orders, and their line items.
pub struct ExpenseRepository {
    pool: Arc<DbPool>,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

/// Rewrites an expense's stored total from both surviving line sets.
fn refresh_expense_total_tx(conn: &mut SqliteConnection, expense: &str) -> Result<Decimal> {
    let food_rows = food_items::table
        .filter(food_items::expense_id.eq(expense))
        .select(FoodItemDB::as_select())
        .load::<FoodItemDB>(conn)
        .map_err(StorageError::from)?;

    let raw_rows = raw_items::table
        .filter(raw_items::expense_id.eq(expense))
        .select(RawItemDB::as_select())
        .load::<RawItemDB>(conn)
        .map_err(StorageError::from)?;

    let mut total = Decimal::ZERO;
    for row in food_rows {
        total += FoodItem::from(row).line_total();
    }
    for row in raw_rows {
        total += RawItem::from(row).line_total();
    }

    diesel::update(expenses::table.find(expense))
        .set(expenses::total_cost.eq(decimal_to_db(total)))
        .execute(conn)
        .map_err(StorageError::from)?;

    Ok(total)
}

impl ExpenseRepositoryTrait for ExpenseRepository {
    fn create_food_product(&self, new_product: NewFoodProduct) -> Result<FoodProduct> {
        self.pool.execute(move |conn| {
            let mut product_db: FoodProductDB = new_product.into();
            if product_db.id.is_empty() {
                product_db.id = Uuid::new_v4().to_string();
            }

            diesel::insert_into(food_products::table)
                .values(&product_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(product_db.into())
        })
    }

    fn update_food_product(&self, product: FoodProduct) -> Result<FoodProduct> {
        self.pool.execute(move |conn| {
            let existing = food_products::table
                .find(&product.id)
                .select(FoodProductDB::as_select())
                .first::<FoodProductDB>(conn)
                .map_err(StorageError::from)?;

            let mut product_db: FoodProductDB = product.into();
            product_db.created_at = existing.created_at;

            diesel::update(food_products::table.find(&product_db.id))
                .set(&product_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(product_db.into())
        })
    }

    fn delete_food_product(&self, product_id: &str) -> Result<usize> {
        let product_id = product_id.to_string();
        self.pool.execute(move |conn| {
            // The foreign key rejects this while line items still
            // reference the product.
            diesel::delete(food_products::table.find(&product_id))
                .execute(conn)
                .map_err(StorageError::from)
                .map_err(Error::from)
        })
    }

    fn list_food_products(&self) -> Result<Vec<FoodProduct>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = food_products::table
            .select(FoodProductDB::as_select())
            .order(food_products::name.asc())
            .load::<FoodProductDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(FoodProduct::from).collect())
    }

    fn create_raw_material(&self, new_material: NewRawMaterial) -> Result<RawMaterial> {
        self.pool.execute(move |conn| {
            let mut material_db: RawMaterialDB = new_material.into();
            if material_db.id.is_empty() {
                material_db.id = Uuid::new_v4().to_string();
            }

            diesel::insert_into(raw_materials::table)
                .values(&material_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(material_db.into())
        })
    }

    fn update_raw_material(&self, material: RawMaterial) -> Result<RawMaterial> {
        self.pool.execute(move |conn| {
            let existing = raw_materials::table
                .find(&material.id)
                .select(RawMaterialDB::as_select())
                .first::<RawMaterialDB>(conn)
                .map_err(StorageError::from)?;

            let mut material_db: RawMaterialDB = material.into();
            material_db.created_at = existing.created_at;

            diesel::update(raw_materials::table.find(&material_db.id))
                .set(&material_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(material_db.into())
        })
    }

    fn delete_raw_material(&self, material_id: &str) -> Result<usize> {
        let material_id = material_id.to_string();
        self.pool.execute(move |conn| {
            diesel::delete(raw_materials::table.find(&material_id))
                .execute(conn)
                .map_err(StorageError::from)
                .map_err(Error::from)
        })
    }

    fn list_raw_materials(&self) -> Result<Vec<RawMaterial>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = raw_materials::table
            .select(RawMaterialDB::as_select())
            .order(raw_materials::name.asc())
            .load::<RawMaterialDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(RawMaterial::from).collect())
    }

    fn create_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        self.pool.execute(move |conn| {
            let conflict = expenses::table
                .filter(expenses::date.eq(new_expense.date))
                .select(expenses::id)
                .first::<String>(conn)
                .optional()
                .map_err(StorageError::from)?;
            if conflict.is_some() {
                return Err(Error::Validation(ValidationError::AlreadyExists(format!(
                    "An expense already exists for {}",
                    new_expense.date
                ))));
            }

            let mut expense_db: ExpenseDB = new_expense.into();
            if expense_db.id.is_empty() {
                expense_db.id = Uuid::new_v4().to_string();
            }

            diesel::insert_into(expenses::table)
                .values(&expense_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(expense_db.into())
        })
    }

    fn update_expense(&self, update: ExpenseUpdate) -> Result<Expense> {
        self.pool.execute(move |conn| {
            let update_id = update.id.clone().unwrap_or_default();

            let mut expense_db = expenses::table
                .find(&update_id)
                .select(ExpenseDB::as_select())
                .first::<ExpenseDB>(conn)
                .map_err(StorageError::from)?;

            let conflict = expenses::table
                .filter(expenses::date.eq(update.date))
                .filter(expenses::id.ne(&update_id))
                .select(expenses::id)
                .first::<String>(conn)
                .optional()
                .map_err(StorageError::from)?;
            if conflict.is_some() {
                return Err(Error::Validation(ValidationError::AlreadyExists(format!(
                    "An expense already exists for {}",
                    update.date
                ))));
            }

            expense_db.date = update.date;
            expense_db.description = update.description;

            diesel::update(expenses::table.find(&update_id))
                .set(&expense_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(expense_db.into())
        })
    }

    fn delete_expense(&self, expense_id: &str) -> Result<usize> {
        let expense_id = expense_id.to_string();
        self.pool.execute(move |conn| {
            // Both line sets cascade with the expense.
            diesel::delete(expenses::table.find(&expense_id))
                .execute(conn)
                .map_err(StorageError::from)
                .map_err(Error::from)
        })
    }

    fn get_expense(&self, expense_id: &str) -> Result<Expense> {
        let mut conn = get_connection(&self.pool)?;

        let expense_db = expenses::table
            .find(expense_id)
            .select(ExpenseDB::as_select())
            .first::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(expense_db.into())
    }

    fn get_expense_details(&self, expense_id: &str) -> Result<ExpenseDetails> {
        let mut conn = get_connection(&self.pool)?;

        let expense_db = expenses::table
            .find(expense_id)
            .select(ExpenseDB::as_select())
            .first::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;

        let food_rows = food_items::table
            .filter(food_items::expense_id.eq(expense_id))
            .select(FoodItemDB::as_select())
            .order(food_items::created_at.asc())
            .load::<FoodItemDB>(&mut conn)
            .map_err(StorageError::from)?;

        let raw_rows = raw_items::table
            .filter(raw_items::expense_id.eq(expense_id))
            .select(RawItemDB::as_select())
            .order(raw_items::created_at.asc())
            .load::<RawItemDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(ExpenseDetails {
            expense: expense_db.into(),
            food_items: food_rows.into_iter().map(FoodItem::from).collect(),
            raw_items: raw_rows.into_iter().map(RawItem::from).collect(),
        })
    }

    fn list_expenses(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = expenses::table.into_boxed();
        if let Some(start) = start_date {
            query = query.filter(expenses::date.ge(start));
        }
        if let Some(end) = end_date {
            query = query.filter(expenses::date.le(end));
        }

        let rows = query
            .select(ExpenseDB::as_select())
            .order(expenses::date.desc())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn replace_food_items(&self, expense_id: &str, items: Vec<NewFoodItem>) -> Result<Expense> {
        let target_expense_id = expense_id.to_string();
        self.pool.execute(move |conn| {
            let mut expense_db = expenses::table
                .find(&target_expense_id)
                .select(ExpenseDB::as_select())
                .first::<ExpenseDB>(conn)
                .map_err(StorageError::from)?;

            diesel::delete(
                food_items::table.filter(food_items::expense_id.eq(&target_expense_id)),
            )
            .execute(conn)
            .map_err(StorageError::from)?;

            let mut rows = Vec::with_capacity(items.len());
            for item in items {
                let mut item_db: FoodItemDB = item.into();
                item_db.expense_id = target_expense_id.clone();
                if item_db.id.is_empty() {
                    item_db.id = Uuid::new_v4().to_string();
                }
                rows.push(item_db);
            }

            diesel::insert_into(food_items::table)
                .values(&rows)
                .execute(conn)
                .map_err(StorageError::from)?;

            let total = refresh_expense_total_tx(conn, &target_expense_id)?;
            expense_db.total_cost = decimal_to_db(total);

            Ok(expense_db.into())
        })
    }

    fn replace_raw_items(&self, expense_id: &str, items: Vec<NewRawItem>) -> Result<Expense> {
        let target_expense_id = expense_id.to_string();
        self.pool.execute(move |conn| {
            let mut expense_db = expenses::table
                .find(&target_expense_id)
                .select(ExpenseDB::as_select())
                .first::<ExpenseDB>(conn)
                .map_err(StorageError::from)?;

            diesel::delete(raw_items::table.filter(raw_items::expense_id.eq(&target_expense_id)))
                .execute(conn)
                .map_err(StorageError::from)?;

            let mut rows = Vec::with_capacity(items.len());
            for item in items {
                let mut item_db: RawItemDB = item.into();
                item_db.expense_id = target_expense_id.clone();
                if item_db.id.is_empty() {
                    item_db.id = Uuid::new_v4().to_string();
                }
                rows.push(item_db);
            }

            diesel::insert_into(raw_items::table)
                .values(&rows)
                .execute(conn)
                .map_err(StorageError::from)?;

            let total = refresh_expense_total_tx(conn, &target_expense_id)?;
            expense_db.total_cost = decimal_to_db(total);

            Ok(expense_db.into())
        })
    }

    fn get_food_items(&self, expense_id: &str) -> Result<Vec<FoodItem>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = food_items::table
            .filter(food_items::expense_id.eq(expense_id))
            .select(FoodItemDB::as_select())
            .order(food_items::created_at.asc())
            .load::<FoodItemDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(FoodItem::from).collect())
    }

    fn get_raw_items(&self, expense_id: &str) -> Result<Vec<RawItem>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = raw_items::table
            .filter(raw_items::expense_id.eq(expense_id))
            .select(RawItemDB::as_select())
            .order(raw_items::created_at.asc())
            .load::<RawItemDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(RawItem::from).collect())
    }
}
