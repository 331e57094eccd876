//! SQLite storage implementation for cost indicators.

mod model;
mod repository;

pub use model::CostIndicatorDB;
pub use repository::CostIndicatorRepository;
