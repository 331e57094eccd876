//! Sales domain models: catalogs, sale orders, and their line items.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A customer the business sells to.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    pub id: String,
    pub name: String,
    pub sign: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new buyer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBuyer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub sign: Option<String>,
    pub phone_number: Option<String>,
}

impl NewBuyer {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Buyer name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// A product from the sales catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub measurement_unit: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub measurement_unit: Option<String>,
}

impl NewProduct {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Product name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// A sale order for one calendar day.
///
/// At most one sale exists per date. `total_amount` is the sum of the
/// current line-item totals, rebuilt after every batch of line edits.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub total_amount: Decimal,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: NaiveDate,
    pub description: Option<String>,
    /// Audit field supplied by the caller's session
    pub created_by: Option<String>,
}

/// Input model for updating an existing sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleUpdate {
    pub id: Option<String>,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl SaleUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Sale ID is required for updates".to_string(),
            )));
        }
        Ok(())
    }
}

/// One sold line of a sale order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub id: String,
    pub sale_id: String,
    pub product_id: String,
    pub buyer_id: Option<String>,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
    /// Stored line total, `quantity * price` at save time
    pub total: Decimal,
    pub created_at: NaiveDateTime,
}

/// Input model for one line of a batch item write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSaleItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub product_id: String,
    pub buyer_id: Option<String>,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
}

impl NewSaleItem {
    pub fn validate(&self) -> Result<()> {
        if self.product_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "productId".to_string(),
            )));
        }
        Ok(())
    }

    /// Line total computed at save time: `quantity * price`, zero when
    /// either factor is absent.
    pub fn line_total(&self) -> Decimal {
        self.quantity
            .zip(self.price)
            .map(|(quantity, price)| quantity * price)
            .unwrap_or_default()
    }
}

/// A sale together with its current line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetails {
    pub sale: Sale,
    pub items: Vec<SaleItem>,
}
