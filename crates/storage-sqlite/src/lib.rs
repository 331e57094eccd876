//! SQLite storage implementation for Shopledger.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `shopledger-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The `core` crate is database-agnostic and works with traits.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!        storage-sqlite (this crate)
//!                │
//!                ▼
//!            SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod analytics;
pub mod balances;
pub mod employees;
pub mod expenses;
pub mod finance;
pub mod sales;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool,
    DbTransactionExecutor,
};

// Re-export storage errors and conversion helpers
pub use errors::{DieselErrorExt, IntoCore, StorageError};

// Re-export from shopledger-core for convenience
pub use shopledger_core::errors::{DatabaseError, Error, Result};
