use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::errors::Result;

use super::expenses_model::{
    Expense, ExpenseDetails, ExpenseUpdate, FoodItem, FoodProduct, NewExpense, NewFoodItem,
    NewFoodProduct, NewRawItem, NewRawMaterial, RawItem, RawMaterial,
};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};

/// Service for managing expenses, their line items and the purchasing
/// catalogs.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl ExpenseServiceTrait for ExpenseService {
    fn create_food_product(&self, new_product: NewFoodProduct) -> Result<FoodProduct> {
        new_product.validate()?;
        self.repository.create_food_product(new_product)
    }

    fn update_food_product(&self, product: FoodProduct) -> Result<FoodProduct> {
        self.repository.update_food_product(product)
    }

    fn delete_food_product(&self, product_id: &str) -> Result<()> {
        self.repository.delete_food_product(product_id)?;
        Ok(())
    }

    fn list_food_products(&self) -> Result<Vec<FoodProduct>> {
        self.repository.list_food_products()
    }

    fn create_raw_material(&self, new_material: NewRawMaterial) -> Result<RawMaterial> {
        new_material.validate()?;
        self.repository.create_raw_material(new_material)
    }

    fn update_raw_material(&self, material: RawMaterial) -> Result<RawMaterial> {
        self.repository.update_raw_material(material)
    }

    fn delete_raw_material(&self, material_id: &str) -> Result<()> {
        self.repository.delete_raw_material(material_id)?;
        Ok(())
    }

    fn list_raw_materials(&self) -> Result<Vec<RawMaterial>> {
        self.repository.list_raw_materials()
    }

    fn create_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        debug!("Creating expense for date {}", new_expense.date);
        self.repository.create_expense(new_expense)
    }

    fn update_expense(&self, update: ExpenseUpdate) -> Result<Expense> {
        update.validate()?;
        self.repository.update_expense(update)
    }

    fn delete_expense(&self, expense_id: &str) -> Result<()> {
        self.repository.delete_expense(expense_id)?;
        Ok(())
    }

    fn get_expense(&self, expense_id: &str) -> Result<Expense> {
        self.repository.get_expense(expense_id)
    }

    fn get_expense_details(&self, expense_id: &str) -> Result<ExpenseDetails> {
        self.repository.get_expense_details(expense_id)
    }

    fn list_expenses(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Expense>> {
        self.repository.list_expenses(start_date, end_date)
    }

    fn save_food_items(&self, expense_id: &str, items: Vec<NewFoodItem>) -> Result<Expense> {
        for item in &items {
            item.validate()?;
        }
        self.repository.replace_food_items(expense_id, items)
    }

    fn save_raw_items(&self, expense_id: &str, items: Vec<NewRawItem>) -> Result<Expense> {
        for item in &items {
            item.validate()?;
        }
        self.repository.replace_raw_items(expense_id, items)
    }

    fn get_food_items(&self, expense_id: &str) -> Result<Vec<FoodItem>> {
        self.repository.get_food_items(expense_id)
    }

    fn get_raw_items(&self, expense_id: &str) -> Result<Vec<RawItem>> {
        self.repository.get_raw_items(expense_id)
    }
}
