//! Shopledger Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Shopledger.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod analytics;
pub mod balances;
pub mod constants;
pub mod employees;
pub mod errors;
pub mod expenses;
pub mod finance;
pub mod panel;
pub mod sales;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
