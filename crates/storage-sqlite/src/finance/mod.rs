//! SQLite storage implementation for cashflow.

mod model;
mod repository;

pub use model::{CashflowRecordDB, MonthlyCashflowDB};
pub use repository::CashflowRepository;
