mod expenses_model;
mod expenses_service;
mod expenses_traits;

pub use expenses_model::{
    Expense, ExpenseDetails, ExpenseUpdate, FoodItem, FoodProduct, NewExpense, NewFoodItem,
    NewFoodProduct, NewRawItem, NewRawMaterial, RawItem, RawMaterial,
};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
