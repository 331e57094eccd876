mod finance_model;
mod finance_service;
mod finance_traits;

pub use finance_model::{
    CashflowRecord, CashflowRecordUpdate, CashflowTotals, MonthlyCashflow, NewCashflowRecord,
};
pub use finance_service::CashflowService;
pub use finance_traits::{CashflowRepositoryTrait, CashflowServiceTrait};

#[cfg(test)]
mod finance_model_tests;
