//! Database models for expense catalogs, expense orders, and line items.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use shopledger_core::expenses::{
    Expense, FoodItem, FoodProduct, NewExpense, NewFoodItem, NewFoodProduct, NewRawItem,
    NewRawMaterial, RawItem, RawMaterial,
};

use crate::utils::{decimal_opt_to_db, decimal_to_db, parse_decimal, parse_decimal_opt};

/// Database model for catalog food products
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
#[diesel(table_name = crate::schema::food_products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FoodProductDB {
    pub id: String,
    pub name: String,
    pub measurement_unit: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for catalog raw materials
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
#[diesel(table_name = crate::schema::raw_materials)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RawMaterialDB {
    pub id: String,
    pub name: String,
    pub measurement_unit: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for expense orders
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
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub total_cost: String,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for food line items
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
#[diesel(table_name = crate::schema::food_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FoodItemDB {
    pub id: String,
    pub expense_id: String,
    pub food_product_id: String,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for raw-material line items
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
#[diesel(table_name = crate::schema::raw_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RawItemDB {
    pub id: String,
    pub expense_id: String,
    pub raw_material_id: String,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub created_at: NaiveDateTime,
}

// Conversion implementations

impl From<FoodProductDB> for FoodProduct {
    fn from(db: FoodProductDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            measurement_unit: db.measurement_unit,
            created_at: db.created_at,
        }
    }
}

impl From<FoodProduct> for FoodProductDB {
    fn from(domain: FoodProduct) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            measurement_unit: domain.measurement_unit,
            created_at: domain.created_at,
        }
    }
}

impl From<NewFoodProduct> for FoodProductDB {
    fn from(domain: NewFoodProduct) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            measurement_unit: domain.measurement_unit,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<RawMaterialDB> for RawMaterial {
    fn from(db: RawMaterialDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            measurement_unit: db.measurement_unit,
            created_at: db.created_at,
        }
    }
}

impl From<RawMaterial> for RawMaterialDB {
    fn from(domain: RawMaterial) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            measurement_unit: domain.measurement_unit,
            created_at: domain.created_at,
        }
    }
}

impl From<NewRawMaterial> for RawMaterialDB {
    fn from(domain: NewRawMaterial) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            measurement_unit: domain.measurement_unit,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            id: db.id,
            date: db.date,
            description: db.description,
            total_cost: parse_decimal(&db.total_cost, "total_cost"),
            created_by: db.created_by,
            created_at: db.created_at,
        }
    }
}

impl From<NewExpense> for ExpenseDB {
    fn from(domain: NewExpense) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            date: domain.date,
            description: domain.description,
            total_cost: decimal_to_db(Default::default()),
            created_by: domain.created_by,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<FoodItemDB> for FoodItem {
    fn from(db: FoodItemDB) -> Self {
        Self {
            id: db.id,
            expense_id: db.expense_id,
            food_product_id: db.food_product_id,
            quantity: parse_decimal_opt(db.quantity.as_deref(), "quantity"),
            price: parse_decimal_opt(db.price.as_deref(), "price"),
            created_at: db.created_at,
        }
    }
}

impl From<NewFoodItem> for FoodItemDB {
    fn from(domain: NewFoodItem) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            expense_id: String::new(), // This will be filled by the repository
            food_product_id: domain.food_product_id,
            quantity: decimal_opt_to_db(domain.quantity),
            price: decimal_opt_to_db(domain.price),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<RawItemDB> for RawItem {
    fn from(db: RawItemDB) -> Self {
        Self {
            id: db.id,
            expense_id: db.expense_id,
            raw_material_id: db.raw_material_id,
            quantity: parse_decimal_opt(db.quantity.as_deref(), "quantity"),
            price: parse_decimal_opt(db.price.as_deref(), "price"),
            created_at: db.created_at,
        }
    }
}

impl From<NewRawItem> for RawItemDB {
    fn from(domain: NewRawItem) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            expense_id: String::new(), // This will be filled by the repository
            raw_material_id: domain.raw_material_id,
            quantity: decimal_opt_to_db(domain.quantity),
            price: decimal_opt_to_db(domain.price),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
