//! SQLite storage implementation for expenses.

mod model;
mod repository;

pub use model::{ExpenseDB, FoodItemDB, FoodProductDB, RawItemDB, RawMaterialDB};
pub use repository::ExpenseRepository;
