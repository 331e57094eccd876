//! Integration tests for expense orders and their two line-item sets.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use shopledger_core::errors::{DatabaseError, ValidationError};
use shopledger_core::expenses::{
    ExpenseRepositoryTrait, FoodProduct, NewExpense, NewFoodItem, NewFoodProduct, NewRawItem,
    NewRawMaterial, RawMaterial,
};
use shopledger_core::Error;
use shopledger_storage_sqlite::expenses::ExpenseRepository;

mod common;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn create_food_product(repository: &ExpenseRepository, name: &str) -> FoodProduct {
    repository
        .create_food_product(NewFoodProduct {
            id: None,
            name: name.to_string(),
            measurement_unit: Some("kg".to_string()),
        })
        .expect("Failed to create food product")
}

fn create_raw_material(repository: &ExpenseRepository, name: &str) -> RawMaterial {
    repository
        .create_raw_material(NewRawMaterial {
            id: None,
            name: name.to_string(),
            measurement_unit: None,
        })
        .expect("Failed to create raw material")
}

fn food_item(product_id: &str, quantity: &str, price: &str) -> NewFoodItem {
    NewFoodItem {
        id: None,
        food_product_id: product_id.to_string(),
        quantity: Some(quantity.parse().unwrap()),
        price: Some(price.parse().unwrap()),
    }
}

fn raw_item(material_id: &str, quantity: &str, price: &str) -> NewRawItem {
    NewRawItem {
        id: None,
        raw_material_id: material_id.to_string(),
        quantity: Some(quantity.parse().unwrap()),
        price: Some(price.parse().unwrap()),
    }
}

#[test]
fn test_total_cost_spans_both_line_sets() {
    let (pool, _temp_dir) = common::setup_db();
    let repository = ExpenseRepository::new(Arc::clone(&pool));
    let flour = create_food_product(&repository, "flour");
    let firewood = create_raw_material(&repository, "firewood");

    let expense = repository
        .create_expense(NewExpense {
            id: None,
            date: date(2024, 3, 1),
            description: None,
            created_by: None,
        })
        .expect("Failed to create expense");
    assert_eq!(expense.total_cost, dec!(0));

    let expense = repository
        .replace_food_items(&expense.id, vec![food_item(&flour.id, "10", "8")])
        .expect("Failed to save food items");
    assert_eq!(expense.total_cost, dec!(80));

    // Raw lines land on top of the surviving food lines.
    let expense = repository
        .replace_raw_items(&expense.id, vec![raw_item(&firewood.id, "2", "35")])
        .expect("Failed to save raw items");
    assert_eq!(expense.total_cost, dec!(150));

    // Replacing the food set leaves the raw contribution intact.
    let expense = repository
        .replace_food_items(&expense.id, vec![food_item(&flour.id, "1", "8")])
        .expect("Failed to replace food items");
    assert_eq!(expense.total_cost, dec!(78));

    // Clearing one set keeps the other's contribution.
    let expense = repository
        .replace_food_items(&expense.id, vec![])
        .expect("Failed to clear food items");
    assert_eq!(expense.total_cost, dec!(70));
}

#[test]
fn test_one_expense_per_day() {
    let (pool, _temp_dir) = common::setup_db();
    let repository = ExpenseRepository::new(Arc::clone(&pool));

    repository
        .create_expense(NewExpense {
            id: None,
            date: date(2024, 4, 1),
            description: None,
            created_by: None,
        })
        .expect("Failed to create expense");

    let duplicate = repository.create_expense(NewExpense {
        id: None,
        date: date(2024, 4, 1),
        description: None,
        created_by: None,
    });
    assert!(matches!(
        duplicate,
        Err(Error::Validation(ValidationError::AlreadyExists(_)))
    ));
}

#[test]
fn test_delete_expense_removes_both_line_sets() {
    let (pool, _temp_dir) = common::setup_db();
    let repository = ExpenseRepository::new(Arc::clone(&pool));
    let flour = create_food_product(&repository, "flour");
    let firewood = create_raw_material(&repository, "firewood");

    let expense = repository
        .create_expense(NewExpense {
            id: None,
            date: date(2024, 5, 1),
            description: None,
            created_by: None,
        })
        .unwrap();
    repository
        .replace_food_items(&expense.id, vec![food_item(&flour.id, "1", "10")])
        .unwrap();
    repository
        .replace_raw_items(&expense.id, vec![raw_item(&firewood.id, "1", "20")])
        .unwrap();

    let deleted = repository
        .delete_expense(&expense.id)
        .expect("Failed to delete expense");
    assert_eq!(deleted, 1);

    assert!(repository.get_food_items(&expense.id).unwrap().is_empty());
    assert!(repository.get_raw_items(&expense.id).unwrap().is_empty());
}

#[test]
fn test_referenced_catalog_rows_cannot_be_deleted() {
    let (pool, _temp_dir) = common::setup_db();
    let repository = ExpenseRepository::new(Arc::clone(&pool));
    let flour = create_food_product(&repository, "flour");
    let firewood = create_raw_material(&repository, "firewood");

    let expense = repository
        .create_expense(NewExpense {
            id: None,
            date: date(2024, 6, 1),
            description: None,
            created_by: None,
        })
        .unwrap();
    repository
        .replace_food_items(&expense.id, vec![food_item(&flour.id, "1", "10")])
        .unwrap();
    repository
        .replace_raw_items(&expense.id, vec![raw_item(&firewood.id, "1", "20")])
        .unwrap();

    assert!(matches!(
        repository.delete_food_product(&flour.id),
        Err(Error::Database(DatabaseError::ForeignKeyViolation(_)))
    ));
    assert!(matches!(
        repository.delete_raw_material(&firewood.id),
        Err(Error::Database(DatabaseError::ForeignKeyViolation(_)))
    ));

    repository.delete_expense(&expense.id).unwrap();
    assert_eq!(repository.delete_food_product(&flour.id).unwrap(), 1);
    assert_eq!(repository.delete_raw_material(&firewood.id).unwrap(), 1);
}

#[test]
fn test_expense_details_carries_both_sets() {
    let (pool, _temp_dir) = common::setup_db();
    let repository = ExpenseRepository::new(Arc::clone(&pool));
    let flour = create_food_product(&repository, "flour");
    let firewood = create_raw_material(&repository, "firewood");

    let expense = repository
        .create_expense(NewExpense {
            id: None,
            date: date(2024, 7, 1),
            description: Some("weekly restock".to_string()),
            created_by: None,
        })
        .unwrap();
    repository
        .replace_food_items(
            &expense.id,
            vec![food_item(&flour.id, "5", "8"), food_item(&flour.id, "2", "9")],
        )
        .unwrap();
    repository
        .replace_raw_items(&expense.id, vec![raw_item(&firewood.id, "1", "30")])
        .unwrap();

    let details = repository.get_expense_details(&expense.id).unwrap();
    assert_eq!(details.food_items.len(), 2);
    assert_eq!(details.raw_items.len(), 1);
    assert_eq!(details.expense.total_cost, dec!(88));
}
