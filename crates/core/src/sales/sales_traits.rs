//! Sales repository and service traits.

use chrono::NaiveDate;

use super::sales_model::{
    Buyer, NewBuyer, NewProduct, NewSale, NewSaleItem, Product, Sale, SaleDetails, SaleItem,
    SaleUpdate,
};
use crate::errors::Result;

/// Trait defining the contract for sales persistence: buyers and products
/// (catalogs), sale orders, and their line items.
pub trait SaleRepositoryTrait: Send + Sync {
    // --- Buyers ---

    fn create_buyer(&self, new_buyer: NewBuyer) -> Result<Buyer>;
    fn update_buyer(&self, buyer: Buyer) -> Result<Buyer>;

    /// Deleting a buyer detaches it from line items rather than failing.
    fn delete_buyer(&self, buyer_id: &str) -> Result<usize>;
    fn list_buyers(&self) -> Result<Vec<Buyer>>;

    // --- Products ---

    fn create_product(&self, new_product: NewProduct) -> Result<Product>;
    fn update_product(&self, product: Product) -> Result<Product>;

    /// Fails with a foreign key violation while line items reference the
    /// product.
    fn delete_product(&self, product_id: &str) -> Result<usize>;
    fn list_products(&self) -> Result<Vec<Product>>;

    // --- Sales ---

    /// Creates a sale after checking no sale exists for the date.
    fn create_sale(&self, new_sale: NewSale) -> Result<Sale>;

    /// Updates a sale's own fields (not its items).
    fn update_sale(&self, sale_update: SaleUpdate) -> Result<Sale>;

    /// Deletes a sale and its line items.
    fn delete_sale(&self, sale_id: &str) -> Result<usize>;

    fn get_sale(&self, sale_id: &str) -> Result<Sale>;

    /// Reads a sale together with its current line items.
    fn get_sale_details(&self, sale_id: &str) -> Result<SaleDetails>;

    /// Lists sales within an optional inclusive date range.
    fn list_sales(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Sale>>;

    // --- Line items ---

    /// Replaces the sale's line items with the given set and recomputes
    /// the sale total from the new lines, all within one transaction.
    fn replace_sale_items(&self, sale_id: &str, items: Vec<NewSaleItem>) -> Result<Sale>;

    fn get_sale_items(&self, sale_id: &str) -> Result<Vec<SaleItem>>;
}

/// Trait defining the contract for sales service operations.
pub trait SaleServiceTrait: Send + Sync {
    fn create_buyer(&self, new_buyer: NewBuyer) -> Result<Buyer>;
    fn update_buyer(&self, buyer: Buyer) -> Result<Buyer>;
    fn delete_buyer(&self, buyer_id: &str) -> Result<()>;
    fn get_all_buyers(&self) -> Result<Vec<Buyer>>;

    fn create_product(&self, new_product: NewProduct) -> Result<Product>;
    fn update_product(&self, product: Product) -> Result<Product>;
    fn delete_product(&self, product_id: &str) -> Result<()>;
    fn get_all_products(&self) -> Result<Vec<Product>>;

    fn create_sale(&self, new_sale: NewSale) -> Result<Sale>;
    fn update_sale(&self, sale_update: SaleUpdate) -> Result<Sale>;
    fn delete_sale(&self, sale_id: &str) -> Result<()>;
    fn get_sale(&self, sale_id: &str) -> Result<Sale>;
    fn get_sale_details(&self, sale_id: &str) -> Result<SaleDetails>;
    fn list_sales(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Sale>>;

    /// Saves the result of a batch line-item edit and returns the sale
    /// with its refreshed total.
    fn save_sale_items(&self, sale_id: &str, items: Vec<NewSaleItem>) -> Result<Sale>;
    fn get_sale_items(&self, sale_id: &str) -> Result<Vec<SaleItem>>;
}
