use std::sync::Arc;

use log::debug;

use crate::errors::Result;
use crate::utils::time_utils::validate_month;

use super::analytics_model::{CostIndicator, CostIndicatorUpdate, NewCostIndicator};
use super::analytics_traits::{CostIndicatorRepositoryTrait, CostIndicatorServiceTrait};

/// Service for managing monthly cost indicators.
pub struct CostIndicatorService {
    repository: Arc<dyn CostIndicatorRepositoryTrait>,
}

impl CostIndicatorService {
    pub fn new(repository: Arc<dyn CostIndicatorRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl CostIndicatorServiceTrait for CostIndicatorService {
    fn create_indicator(&self, new_indicator: NewCostIndicator) -> Result<CostIndicator> {
        validate_month(new_indicator.month)?;
        debug!(
            "Creating cost indicator for {}-{:02}",
            new_indicator.year, new_indicator.month
        );
        self.repository.create(new_indicator)
    }

    fn update_indicator(&self, update: CostIndicatorUpdate) -> Result<CostIndicator> {
        update.validate()?;
        validate_month(update.month)?;
        self.repository.update(update)
    }

    fn delete_indicator(&self, indicator_id: &str) -> Result<()> {
        self.repository.delete(indicator_id)?;
        Ok(())
    }

    fn get_indicator(&self, indicator_id: &str) -> Result<CostIndicator> {
        self.repository.get_by_id(indicator_id)
    }

    fn get_indicator_for_period(&self, year: i32, month: i32) -> Result<Option<CostIndicator>> {
        validate_month(month)?;
        self.repository.get_by_period(year, month)
    }

    fn list_indicators(&self, year: Option<i32>) -> Result<Vec<CostIndicator>> {
        self.repository.list(year)
    }
}
