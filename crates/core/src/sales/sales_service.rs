use log::debug;
use std::sync::Arc;

use super::sales_model::{
    Buyer, NewBuyer, NewProduct, NewSale, NewSaleItem, Product, Sale, SaleDetails, SaleItem,
    SaleUpdate,
};
use super::sales_traits::{SaleRepositoryTrait, SaleServiceTrait};
use crate::errors::Result;
use chrono::NaiveDate;

/// Service for managing sales, their line items, and the sales catalogs
pub struct SaleService {
    repository: Arc<dyn SaleRepositoryTrait>,
}

impl SaleService {
    /// Creates a new SaleService instance
    pub fn new(repository: Arc<dyn SaleRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl SaleServiceTrait for SaleService {
    fn create_buyer(&self, new_buyer: NewBuyer) -> Result<Buyer> {
        new_buyer.validate()?;
        self.repository.create_buyer(new_buyer)
    }

    fn update_buyer(&self, buyer: Buyer) -> Result<Buyer> {
        self.repository.update_buyer(buyer)
    }

    fn delete_buyer(&self, buyer_id: &str) -> Result<()> {
        self.repository.delete_buyer(buyer_id)?;
        Ok(())
    }

    fn get_all_buyers(&self) -> Result<Vec<Buyer>> {
        self.repository.list_buyers()
    }

    fn create_product(&self, new_product: NewProduct) -> Result<Product> {
        new_product.validate()?;
        self.repository.create_product(new_product)
    }

    fn update_product(&self, product: Product) -> Result<Product> {
        self.repository.update_product(product)
    }

    fn delete_product(&self, product_id: &str) -> Result<()> {
        self.repository.delete_product(product_id)?;
        Ok(())
    }

    fn get_all_products(&self) -> Result<Vec<Product>> {
        self.repository.list_products()
    }

    /// Creates a sale for a date; one sale per date is enforced by the
    /// repository before anything is persisted
    fn create_sale(&self, new_sale: NewSale) -> Result<Sale> {
        debug!("Creating sale for {}", new_sale.date);
        self.repository.create_sale(new_sale)
    }

    fn update_sale(&self, sale_update: SaleUpdate) -> Result<Sale> {
        sale_update.validate()?;
        self.repository.update_sale(sale_update)
    }

    fn delete_sale(&self, sale_id: &str) -> Result<()> {
        self.repository.delete_sale(sale_id)?;
        Ok(())
    }

    fn get_sale(&self, sale_id: &str) -> Result<Sale> {
        self.repository.get_sale(sale_id)
    }

    fn get_sale_details(&self, sale_id: &str) -> Result<SaleDetails> {
        self.repository.get_sale_details(sale_id)
    }

    fn list_sales(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Sale>> {
        self.repository.list_sales(start_date, end_date)
    }

    /// Saves a batch of line items and refreshes the sale total
    fn save_sale_items(&self, sale_id: &str, items: Vec<NewSaleItem>) -> Result<Sale> {
        debug!("Saving {} line items for sale {}", items.len(), sale_id);
        for item in &items {
            item.validate()?;
        }
        self.repository.replace_sale_items(sale_id, items)
    }

    fn get_sale_items(&self, sale_id: &str) -> Result<Vec<SaleItem>> {
        self.repository.get_sale_items(sale_id)
    }
}
