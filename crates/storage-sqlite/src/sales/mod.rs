//! SQLite storage implementation for sales.

mod model;
mod repository;

pub use model::{BuyerDB, ProductDB, SaleDB, SaleItemDB};
pub use repository::SaleRepository;
