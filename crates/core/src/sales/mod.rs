//! Sales module - buyers, products, sale orders, and line items.

mod sales_model;
mod sales_service;
mod sales_traits;

#[cfg(test)]
mod sales_model_tests;

// Re-export the public interface
pub use sales_model::{
    Buyer, NewBuyer, NewProduct, NewSale, NewSaleItem, Product, Sale, SaleDetails, SaleItem,
    SaleUpdate,
};
pub use sales_service::SaleService;
pub use sales_traits::{SaleRepositoryTrait, SaleServiceTrait};
