//! Database models for sales catalogs, sale orders, and line items.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use shopledger_core::sales::{Buyer, NewBuyer, NewProduct, NewSale, NewSaleItem, Product, Sale, SaleItem};

use crate::utils::{decimal_opt_to_db, decimal_to_db, parse_decimal, parse_decimal_opt};

/// Database model for buyers
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::buyers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BuyerDB {
    pub id: String,
    pub name: String,
    pub sign: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for catalog products
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductDB {
    pub id: String,
    pub name: String,
    pub measurement_unit: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for sale orders
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::sales)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SaleDB {
    pub id: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub total_amount: String,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for sale line items
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::sale_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SaleItemDB {
    pub id: String,
    pub sale_id: String,
    pub product_id: String,
    pub buyer_id: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub total: String,
    pub created_at: NaiveDateTime,
}

// Conversion implementations

impl From<BuyerDB> for Buyer {
    fn from(db: BuyerDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            sign: db.sign,
            phone_number: db.phone_number,
            created_at: db.created_at,
        }
    }
}

impl From<Buyer> for BuyerDB {
    fn from(domain: Buyer) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            sign: domain.sign,
            phone_number: domain.phone_number,
            created_at: domain.created_at,
        }
    }
}

impl From<NewBuyer> for BuyerDB {
    fn from(domain: NewBuyer) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            sign: domain.sign,
            phone_number: domain.phone_number,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<ProductDB> for Product {
    fn from(db: ProductDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            measurement_unit: db.measurement_unit,
            created_at: db.created_at,
        }
    }
}

impl From<Product> for ProductDB {
    fn from(domain: Product) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            measurement_unit: domain.measurement_unit,
            created_at: domain.created_at,
        }
    }
}

impl From<NewProduct> for ProductDB {
    fn from(domain: NewProduct) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            measurement_unit: domain.measurement_unit,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<SaleDB> for Sale {
    fn from(db: SaleDB) -> Self {
        Self {
            id: db.id,
            date: db.date,
            description: db.description,
            total_amount: parse_decimal(&db.total_amount, "total_amount"),
            created_by: db.created_by,
            created_at: db.created_at,
        }
    }
}

impl From<NewSale> for SaleDB {
    fn from(domain: NewSale) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            date: domain.date,
            description: domain.description,
            total_amount: decimal_to_db(Default::default()),
            created_by: domain.created_by,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<SaleItemDB> for SaleItem {
    fn from(db: SaleItemDB) -> Self {
        Self {
            id: db.id,
            sale_id: db.sale_id,
            product_id: db.product_id,
            buyer_id: db.buyer_id,
            quantity: parse_decimal_opt(db.quantity.as_deref(), "quantity"),
            price: parse_decimal_opt(db.price.as_deref(), "price"),
            total: parse_decimal(&db.total, "total"),
            created_at: db.created_at,
        }
    }
}

impl From<NewSaleItem> for SaleItemDB {
    fn from(domain: NewSaleItem) -> Self {
        let total = domain.line_total();
        Self {
            id: domain.id.unwrap_or_default(),
            sale_id: String::new(), // This will be filled by the repository
            product_id: domain.product_id,
            buyer_id: domain.buyer_id,
            quantity: decimal_opt_to_db(domain.quantity),
            price: decimal_opt_to_db(domain.price),
            total: decimal_to_db(total),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
