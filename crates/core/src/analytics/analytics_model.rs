//! Cost indicator models.
//!
//! One indicator per month captures the fixed operating costs that do
//! not flow through the order ledgers. Unlike the derived statistics
//! rows it is entered and edited by hand.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Hand-entered monthly operating costs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CostIndicator {
    pub id: String,
    pub year: i32,
    pub month: i32,
    pub rent: Decimal,
    pub electricity: Decimal,
    pub gas: Decimal,
    pub water: Decimal,
    pub salaries: Decimal,
    pub machine_equipment: Decimal,
    pub tools_equipment: Decimal,
    pub staff_food: Decimal,
    pub created_at: NaiveDateTime,
}

impl CostIndicator {
    /// Sum of all cost categories for the month.
    pub fn total_costs(&self) -> Decimal {
        self.rent
            + self.electricity
            + self.gas
            + self.water
            + self.salaries
            + self.machine_equipment
            + self.tools_equipment
            + self.staff_food
    }
}

/// Input model for creating a cost indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCostIndicator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub year: i32,
    pub month: i32,
    /// Missing amounts are coerced to zero at save
    pub rent: Option<Decimal>,
    pub electricity: Option<Decimal>,
    pub gas: Option<Decimal>,
    pub water: Option<Decimal>,
    pub salaries: Option<Decimal>,
    pub machine_equipment: Option<Decimal>,
    pub tools_equipment: Option<Decimal>,
    pub staff_food: Option<Decimal>,
}

/// Input model for updating a cost indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostIndicatorUpdate {
    pub id: Option<String>,
    pub year: i32,
    pub month: i32,
    pub rent: Option<Decimal>,
    pub electricity: Option<Decimal>,
    pub gas: Option<Decimal>,
    pub water: Option<Decimal>,
    pub salaries: Option<Decimal>,
    pub machine_equipment: Option<Decimal>,
    pub tools_equipment: Option<Decimal>,
    pub staff_food: Option<Decimal>,
}

impl CostIndicatorUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cost indicator ID is required for updates".to_string(),
            )));
        }
        Ok(())
    }
}
