//! SQLite storage implementation for the balance ledger and statistics.

mod model;
mod repository;

pub use model::{BalanceEntryDB, MonthBalanceDB, YearBalanceDB};
pub use repository::BalanceRepository;
