use std::sync::Arc;

use diesel::prelude::*;
use uuid::Uuid;

use shopledger_core::analytics::{
    CostIndicator, CostIndicatorRepositoryTrait, CostIndicatorUpdate, NewCostIndicator,
};
use shopledger_core::errors::ValidationError;
use shopledger_core::{Error, Result};

use super::model::CostIndicatorDB;
use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::errors::StorageError;
use crate::schema::cost_indicators;
use crate::schema::cost_indicators::dsl::*;

/// Repository for the hand-entered monthly cost indicators.
pub struct CostIndicatorRepository {
    pool: Arc<DbPool>,
}

impl CostIndicatorRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl CostIndicatorRepositoryTrait for CostIndicatorRepository {
    fn create(&self, new_indicator: NewCostIndicator) -> Result<CostIndicator> {
        self.pool.execute(move |conn| {
            let occupied = cost_indicators
                .filter(year.eq(new_indicator.year))
                .filter(month.eq(new_indicator.month))
                .select(id)
                .first::<String>(conn)
                .optional()
                .map_err(StorageError::from)?;
            if occupied.is_some() {
                return Err(Error::Validation(ValidationError::AlreadyExists(format!(
                    "A cost indicator already exists for {}-{:02}",
                    new_indicator.year, new_indicator.month
                ))));
            }

            let mut indicator_db: CostIndicatorDB = new_indicator.into();
            if indicator_db.id.is_empty() {
                indicator_db.id = Uuid::new_v4().to_string();
            }

            diesel::insert_into(cost_indicators::table)
                .values(&indicator_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(indicator_db.into())
        })
    }

    fn update(&self, update: CostIndicatorUpdate) -> Result<CostIndicator> {
        self.pool.execute(move |conn| {
            let update_id = update.id.clone().unwrap_or_default();

            let existing = cost_indicators
                .find(&update_id)
                .select(CostIndicatorDB::as_select())
                .first::<CostIndicatorDB>(conn)
                .map_err(StorageError::from)?;

            let occupied = cost_indicators
                .filter(year.eq(update.year))
                .filter(month.eq(update.month))
                .filter(id.ne(&update_id))
                .select(id)
                .first::<String>(conn)
                .optional()
                .map_err(StorageError::from)?;
            if occupied.is_some() {
                return Err(Error::Validation(ValidationError::AlreadyExists(format!(
                    "A cost indicator already exists for {}-{:02}",
                    update.year, update.month
                ))));
            }

            let mut indicator_db: CostIndicatorDB = update.into();
            indicator_db.id = update_id;
            indicator_db.created_at = existing.created_at;

            diesel::update(cost_indicators.find(&indicator_db.id))
                .set(&indicator_db)
                .execute(conn)
                .map_err(StorageError::from)?;

            Ok(indicator_db.into())
        })
    }

    fn delete(&self, indicator_id: &str) -> Result<usize> {
        let indicator_id = indicator_id.to_string();
        self.pool.execute(move |conn| {
            diesel::delete(cost_indicators.find(&indicator_id))
                .execute(conn)
                .map_err(StorageError::from)
                .map_err(Error::from)
        })
    }

    fn get_by_id(&self, indicator_id: &str) -> Result<CostIndicator> {
        let mut conn = get_connection(&self.pool)?;

        let indicator_db = cost_indicators
            .find(indicator_id)
            .select(CostIndicatorDB::as_select())
            .first::<CostIndicatorDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(indicator_db.into())
    }

    fn get_by_period(&self, target_year: i32, target_month: i32) -> Result<Option<CostIndicator>> {
        let mut conn = get_connection(&self.pool)?;

        let row = cost_indicators
            .filter(year.eq(target_year))
            .filter(month.eq(target_month))
            .select(CostIndicatorDB::as_select())
            .first::<CostIndicatorDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(row.map(CostIndicator::from))
    }

    fn list(&self, year_filter: Option<i32>) -> Result<Vec<CostIndicator>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = cost_indicators.into_boxed();
        if let Some(target_year) = year_filter {
            query = query.filter(year.eq(target_year));
        }

        let rows = query
            .select(CostIndicatorDB::as_select())
            .order((year.desc(), month.desc()))
            .load::<CostIndicatorDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(CostIndicator::from).collect())
    }
}
