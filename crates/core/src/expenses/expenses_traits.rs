//! Repository and service traits for the expenses domain.
//!
//! Line-item batch writes and the parent `total_cost` refresh happen in
//! one database transaction, the same contract the sales domain uses.

use chrono::NaiveDate;

use crate::errors::Result;

use super::expenses_model::{
    Expense, ExpenseDetails, ExpenseUpdate, FoodItem, FoodProduct, NewExpense, NewFoodItem,
    NewFoodProduct, NewRawItem, NewRawMaterial, RawItem, RawMaterial,
};

/// Trait defining data access for expenses, their line items and the
/// purchasing catalogs.
pub trait ExpenseRepositoryTrait: Send + Sync {
    // Food product catalog
    fn create_food_product(&self, new_product: NewFoodProduct) -> Result<FoodProduct>;
    fn update_food_product(&self, product: FoodProduct) -> Result<FoodProduct>;
    /// Fails while any food item still references the product.
    fn delete_food_product(&self, product_id: &str) -> Result<usize>;
    fn list_food_products(&self) -> Result<Vec<FoodProduct>>;

    // Raw material catalog
    fn create_raw_material(&self, new_material: NewRawMaterial) -> Result<RawMaterial>;
    fn update_raw_material(&self, material: RawMaterial) -> Result<RawMaterial>;
    /// Fails while any raw item still references the material.
    fn delete_raw_material(&self, material_id: &str) -> Result<usize>;
    fn list_raw_materials(&self) -> Result<Vec<RawMaterial>>;

    // Expenses
    /// Persists a new expense. The date must not already carry one.
    fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    fn update_expense(&self, update: ExpenseUpdate) -> Result<Expense>;
    /// Deletes an expense together with all of its line items.
    fn delete_expense(&self, expense_id: &str) -> Result<usize>;
    fn get_expense(&self, expense_id: &str) -> Result<Expense>;
    fn get_expense_details(&self, expense_id: &str) -> Result<ExpenseDetails>;
    fn list_expenses(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Expense>>;

    // Line items
    /// Replaces the food lines of an expense and refreshes the parent
    /// `total_cost` from both surviving line sets, in one transaction.
    fn replace_food_items(&self, expense_id: &str, items: Vec<NewFoodItem>) -> Result<Expense>;
    /// Replaces the raw-material lines of an expense and refreshes the
    /// parent `total_cost` from both surviving line sets, in one
    /// transaction.
    fn replace_raw_items(&self, expense_id: &str, items: Vec<NewRawItem>) -> Result<Expense>;
    fn get_food_items(&self, expense_id: &str) -> Result<Vec<FoodItem>>;
    fn get_raw_items(&self, expense_id: &str) -> Result<Vec<RawItem>>;
}

/// Trait defining the business operations of the expenses domain.
pub trait ExpenseServiceTrait: Send + Sync {
    fn create_food_product(&self, new_product: NewFoodProduct) -> Result<FoodProduct>;
    fn update_food_product(&self, product: FoodProduct) -> Result<FoodProduct>;
    fn delete_food_product(&self, product_id: &str) -> Result<()>;
    fn list_food_products(&self) -> Result<Vec<FoodProduct>>;

    fn create_raw_material(&self, new_material: NewRawMaterial) -> Result<RawMaterial>;
    fn update_raw_material(&self, material: RawMaterial) -> Result<RawMaterial>;
    fn delete_raw_material(&self, material_id: &str) -> Result<()>;
    fn list_raw_materials(&self) -> Result<Vec<RawMaterial>>;

    fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    fn update_expense(&self, update: ExpenseUpdate) -> Result<Expense>;
    fn delete_expense(&self, expense_id: &str) -> Result<()>;
    fn get_expense(&self, expense_id: &str) -> Result<Expense>;
    fn get_expense_details(&self, expense_id: &str) -> Result<ExpenseDetails>;
    fn list_expenses(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Expense>>;

    fn save_food_items(&self, expense_id: &str, items: Vec<NewFoodItem>) -> Result<Expense>;
    fn save_raw_items(&self, expense_id: &str, items: Vec<NewRawItem>) -> Result<Expense>;
    fn get_food_items(&self, expense_id: &str) -> Result<Vec<FoodItem>>;
    fn get_raw_items(&self, expense_id: &str) -> Result<Vec<RawItem>>;
}
