//! Expense domain models: ingredient catalogs, expense orders, and their
//! food / raw-material line items.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A food product from the purchasing catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FoodProduct {
    pub id: String,
    pub name: String,
    pub measurement_unit: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new food product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub measurement_unit: Option<String>,
}

impl NewFoodProduct {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Food product name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// A raw material from the purchasing catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    pub id: String,
    pub name: String,
    pub measurement_unit: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new raw material.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRawMaterial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub measurement_unit: Option<String>,
}

impl NewRawMaterial {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Raw material name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// An expense order for one calendar day.
///
/// At most one expense exists per date. `total_cost` is the sum of the
/// current food and raw-material line totals, rebuilt after every batch
/// of line edits.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub total_cost: Decimal,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: NaiveDate,
    pub description: Option<String>,
    /// Audit field supplied by the caller's session
    pub created_by: Option<String>,
}

/// Input model for updating an existing expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub id: Option<String>,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense ID is required for updates".to_string(),
            )));
        }
        Ok(())
    }
}

/// One food line of an expense order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub expense_id: String,
    pub food_product_id: String,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
    pub created_at: NaiveDateTime,
}

impl FoodItem {
    /// Line total: `quantity * price`, zero when either factor is absent.
    pub fn line_total(&self) -> Decimal {
        line_total(self.quantity, self.price)
    }
}

/// One raw-material line of an expense order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub id: String,
    pub expense_id: String,
    pub raw_material_id: String,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
    pub created_at: NaiveDateTime,
}

impl RawItem {
    /// Line total: `quantity * price`, zero when either factor is absent.
    pub fn line_total(&self) -> Decimal {
        line_total(self.quantity, self.price)
    }
}

/// Input model for one food line of a batch item write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub food_product_id: String,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
}

impl NewFoodItem {
    pub fn validate(&self) -> Result<()> {
        if self.food_product_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "foodProductId".to_string(),
            )));
        }
        Ok(())
    }

    pub fn line_total(&self) -> Decimal {
        line_total(self.quantity, self.price)
    }
}

/// Input model for one raw-material line of a batch item write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRawItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub raw_material_id: String,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
}

impl NewRawItem {
    pub fn validate(&self) -> Result<()> {
        if self.raw_material_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "rawMaterialId".to_string(),
            )));
        }
        Ok(())
    }

    pub fn line_total(&self) -> Decimal {
        line_total(self.quantity, self.price)
    }
}

/// An expense together with its current line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDetails {
    pub expense: Expense,
    pub food_items: Vec<FoodItem>,
    pub raw_items: Vec<RawItem>,
}

fn line_total(quantity: Option<Decimal>, price: Option<Decimal>) -> Decimal {
    quantity
        .zip(price)
        .map(|(quantity, price)| quantity * price)
        .unwrap_or_default()
}
