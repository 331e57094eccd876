//! Database model for monthly cost indicators.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use shopledger_core::analytics::{CostIndicator, CostIndicatorUpdate, NewCostIndicator};

use crate::utils::{decimal_to_db, parse_decimal};

/// Database model for cost indicators
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
#[diesel(table_name = crate::schema::cost_indicators)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CostIndicatorDB {
    pub id: String,
    pub year: i32,
    pub month: i32,
    pub rent: String,
    pub electricity: String,
    pub gas: String,
    pub water: String,
    pub salaries: String,
    pub machine_equipment: String,
    pub tools_equipment: String,
    pub staff_food: String,
    pub created_at: NaiveDateTime,
}

// Conversion implementations

impl From<CostIndicatorDB> for CostIndicator {
    fn from(db: CostIndicatorDB) -> Self {
        Self {
            id: db.id,
            year: db.year,
            month: db.month,
            rent: parse_decimal(&db.rent, "rent"),
            electricity: parse_decimal(&db.electricity, "electricity"),
            gas: parse_decimal(&db.gas, "gas"),
            water: parse_decimal(&db.water, "water"),
            salaries: parse_decimal(&db.salaries, "salaries"),
            machine_equipment: parse_decimal(&db.machine_equipment, "machine_equipment"),
            tools_equipment: parse_decimal(&db.tools_equipment, "tools_equipment"),
            staff_food: parse_decimal(&db.staff_food, "staff_food"),
            created_at: db.created_at,
        }
    }
}

impl From<NewCostIndicator> for CostIndicatorDB {
    fn from(domain: NewCostIndicator) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            year: domain.year,
            month: domain.month,
            rent: decimal_to_db(domain.rent.unwrap_or_default()),
            electricity: decimal_to_db(domain.electricity.unwrap_or_default()),
            gas: decimal_to_db(domain.gas.unwrap_or_default()),
            water: decimal_to_db(domain.water.unwrap_or_default()),
            salaries: decimal_to_db(domain.salaries.unwrap_or_default()),
            machine_equipment: decimal_to_db(domain.machine_equipment.unwrap_or_default()),
            tools_equipment: decimal_to_db(domain.tools_equipment.unwrap_or_default()),
            staff_food: decimal_to_db(domain.staff_food.unwrap_or_default()),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<CostIndicatorUpdate> for CostIndicatorDB {
    fn from(domain: CostIndicatorUpdate) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            year: domain.year,
            month: domain.month,
            rent: decimal_to_db(domain.rent.unwrap_or_default()),
            electricity: decimal_to_db(domain.electricity.unwrap_or_default()),
            gas: decimal_to_db(domain.gas.unwrap_or_default()),
            water: decimal_to_db(domain.water.unwrap_or_default()),
            salaries: decimal_to_db(domain.salaries.unwrap_or_default()),
            machine_equipment: decimal_to_db(domain.machine_equipment.unwrap_or_default()),
            tools_equipment: decimal_to_db(domain.tools_equipment.unwrap_or_default()),
            staff_food: decimal_to_db(domain.staff_food.unwrap_or_default()),
            created_at: NaiveDateTime::default(), // This will be filled from existing record
        }
    }
}
