use std::sync::Arc;

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use shopledger_core::errors::ValidationError;
use shopledger_core::sales::{
    Buyer, NewBuyer, NewProduct, NewSale, NewSaleItem, Product, Sale, SaleDetails, SaleItem,
    SaleRepositoryTrait, SaleUpdate,
};
use shopledger_core::{Error, Result};

use super::model::{BuyerDB, ProductDB, SaleDB, SaleItemDB};
use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::errors::StorageError;
use crate::schema::{buyers, products, sale_items, sales};
use crate::utils::decimal_to_db;

/// Repository for sales catalogs, sale orders, and their line items.
pub struct SaleRepository {
    pool: Arc<DbPool>,
}

impl SaleRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl SaleRepositoryTrait for SaleRepository {
    fn create_buyer(&self, new_buyer: NewBuyer) -> Result<Buyer> {
        self.pool.execute(move |conn| {
            let mut buyer_db: BuyerDB = new_buyer.into();
            if buyer_db.id.is_empty() {
                buyer_db.id = Uuid::new_v4().to_string();
            }

            diesel::insert_into(buyers::table)
                .values(&buyer_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(buyer_db.into())
        })
    }

    fn update_buyer(&self, buyer: Buyer) -> Result<Buyer> {
        self.pool.execute(move |conn| {
            let existing = buyers::table
                .find(&buyer.id)
                .select(BuyerDB::as_select())
                .first::<BuyerDB>(conn)
                .map_err(StorageError::from)?;

            let mut buyer_db: BuyerDB = buyer.into();
            buyer_db.created_at = existing.created_at;

            diesel::update(buyers::table.find(&buyer_db.id))
                .set(&buyer_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(buyer_db.into())
        })
    }

    fn delete_buyer(&self, buyer_id: &str) -> Result<usize> {
        let buyer_id = buyer_id.to_string();
        self.pool.execute(move |conn| {
            // Line items keep their row and lose the buyer reference.
            diesel::delete(buyers::table.find(&buyer_id))
                .execute(conn)
                .map_err(StorageError::from)
                .map_err(Error::from)
        })
    }

    fn list_buyers(&self) -> Result<Vec<Buyer>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = buyers::table
            .select(BuyerDB::as_select())
            .order(buyers::name.asc())
            .load::<BuyerDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Buyer::from).collect())
    }

    fn create_product(&self, new_product: NewProduct) -> Result<Product> {
        self.pool.execute(move |conn| {
            let mut product_db: ProductDB = new_product.into();
            if product_db.id.is_empty() {
                product_db.id = Uuid::new_v4().to_string();
            }

            diesel::insert_into(products::table)
                .values(&product_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(product_db.into())
        })
    }

    fn update_product(&self, product: Product) -> Result<Product> {
        self.pool.execute(move |conn| {
            let existing = products::table
                .find(&product.id)
                .select(ProductDB::as_select())
                .first::<ProductDB>(conn)
                .map_err(StorageError::from)?;

            let mut product_db: ProductDB = product.into();
            product_db.created_at = existing.created_at;

            diesel::update(products::table.find(&product_db.id))
                .set(&product_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(product_db.into())
        })
    }

    fn delete_product(&self, product_id: &str) -> Result<usize> {
        let product_id = product_id.to_string();
        self.pool.execute(move |conn| {
            // The foreign key rejects this while line items still
            // reference the product.
            diesel::delete(products::table.find(&product_id))
                .execute(conn)
                .map_err(StorageError::from)
                .map_err(Error::from)
        })
    }

    fn list_products(&self) -> Result<Vec<Product>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = products::table
            .select(ProductDB::as_select())
            .order(products::name.asc())
            .load::<ProductDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn create_sale(&self, new_sale: NewSale) -> Result<Sale> {
        self.pool.execute(move |conn| {
            let conflict = sales::table
                .filter(sales::date.eq(new_sale.date))
                .select(sales::id)
                .first::<String>(conn)
                .optional()
                .map_err(StorageError::from)?;
            if conflict.is_some() {
                return Err(Error::Validation(ValidationError::AlreadyExists(format!(
                    "A sale already exists for {}",
                    new_sale.date
                ))));
            }

            let mut sale_db: SaleDB = new_sale.into();
            if sale_db.id.is_empty() {
                sale_db.id = Uuid::new_v4().to_string();
            }

            diesel::insert_into(sales::table)
                .values(&sale_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(sale_db.into())
        })
    }

    fn update_sale(&self, sale_update: SaleUpdate) -> Result<Sale> {
        self.pool.execute(move |conn| {
            let update_id = sale_update.id.clone().unwrap_or_default();

            let mut sale_db = sales::table
                .find(&update_id)
                .select(SaleDB::as_select())
                .first::<SaleDB>(conn)
                .map_err(StorageError::from)?;

            let conflict = sales::table
                .filter(sales::date.eq(sale_update.date))
                .filter(sales::id.ne(&update_id))
                .select(sales::id)
                .first::<String>(conn)
                .optional()
                .map_err(StorageError::from)?;
            if conflict.is_some() {
                return Err(Error::Validation(ValidationError::AlreadyExists(format!(
                    "A sale already exists for {}",
                    sale_update.date
                ))));
            }

            sale_db.date = sale_update.date;
            sale_db.description = sale_update.description;

            diesel::update(sales::table.find(&update_id))
                .set(&sale_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(sale_db.into())
        })
    }

    fn delete_sale(&self, sale_id: &str) -> Result<usize> {
        let sale_id = sale_id.to_string();
        self.pool.execute(move |conn| {
            // Line items cascade with the sale.
            diesel::delete(sales::table.find(&sale_id))
                .execute(conn)
                .map_err(StorageError::from)
                .map_err(Error::from)
        })
    }

    fn get_sale(&self, sale_id: &str) -> Result<Sale> {
        let mut conn = get_connection(&self.pool)?;

        let sale_db = sales::table
            .find(sale_id)
            .select(SaleDB::as_select())
            .first::<SaleDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(sale_db.into())
    }

    fn get_sale_details(&self, sale_id: &str) -> Result<SaleDetails> {
        let mut conn = get_connection(&self.pool)?;

        let sale_db = sales::table
            .find(sale_id)
            .select(SaleDB::as_select())
            .first::<SaleDB>(&mut conn)
            .map_err(StorageError::from)?;

        let item_rows = sale_items::table
            .filter(sale_items::sale_id.eq(sale_id))
            .select(SaleItemDB::as_select())
            .order(sale_items::created_at.asc())
            .load::<SaleItemDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(SaleDetails {
            sale: sale_db.into(),
            items: item_rows.into_iter().map(SaleItem::from).collect(),
        })
    }

    fn list_sales(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Sale>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = sales::table.into_boxed();
        if let Some(start) = start_date {
            query = query.filter(sales::date.ge(start));
        }
        if let Some(end) = end_date {
            query = query.filter(sales::date.le(end));
        }

        let rows = query
            .select(SaleDB::as_select())
            .order(sales::date.desc())
            .load::<SaleDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Sale::from).collect())
    }

    fn replace_sale_items(&self, sale_id: &str, items: Vec<NewSaleItem>) -> Result<Sale> {
        let target_sale_id = sale_id.to_string();
        self.pool.execute(move |conn| {
            let mut sale_db = sales::table
                .find(&target_sale_id)
                .select(SaleDB::as_select())
                .first::<SaleDB>(conn)
                .map_err(StorageError::from)?;

            diesel::delete(sale_items::table.filter(sale_items::sale_id.eq(&target_sale_id)))
                .execute(conn)
                .map_err(StorageError::from)?;

            let mut total = Decimal::ZERO;
            let mut rows = Vec::with_capacity(items.len());
            for item in items {
                total += item.line_total();
                let mut item_db: SaleItemDB = item.into();
                item_db.sale_id = target_sale_id.clone();
                if item_db.id.is_empty() {
                    item_db.id = Uuid::new_v4().to_string();
                }
                rows.push(item_db);
            }

            diesel::insert_into(sale_items::table)
                .values(&rows)
                .execute(conn)
                .map_err(StorageError::from)?;

            sale_db.total_amount = decimal_to_db(total);
            diesel::update(sales::table.find(&target_sale_id))
                .set(sales::total_amount.eq(&sale_db.total_amount))
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(sale_db.into())
        })
    }

    fn get_sale_items(&self, sale_id: &str) -> Result<Vec<SaleItem>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = sale_items::table
            .filter(sale_items::sale_id.eq(sale_id))
            .select(SaleItemDB::as_select())
            .order(sale_items::created_at.asc())
            .load::<SaleItemDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(SaleItem::from).collect())
    }
}
