use crate::errors::Result;

use super::analytics_model::{CostIndicator, CostIndicatorUpdate, NewCostIndicator};

/// Trait defining data access for monthly cost indicators.
pub trait CostIndicatorRepositoryTrait: Send + Sync {
    /// Persists a new indicator. The (year, month) pair must not
    /// already carry one.
    fn create(&self, new_indicator: NewCostIndicator) -> Result<CostIndicator>;
    /// Updates an indicator. Moving it onto an occupied (year, month)
    /// pair is rejected.
    fn update(&self, update: CostIndicatorUpdate) -> Result<CostIndicator>;
    fn delete(&self, indicator_id: &str) -> Result<usize>;
    fn get_by_id(&self, indicator_id: &str) -> Result<CostIndicator>;
    fn get_by_period(&self, year: i32, month: i32) -> Result<Option<CostIndicator>>;
    fn list(&self, year: Option<i32>) -> Result<Vec<CostIndicator>>;
}

/// Trait defining the business operations for cost indicators.
pub trait CostIndicatorServiceTrait: Send + Sync {
    fn create_indicator(&self, new_indicator: NewCostIndicator) -> Result<CostIndicator>;
    fn update_indicator(&self, update: CostIndicatorUpdate) -> Result<CostIndicator>;
    fn delete_indicator(&self, indicator_id: &str) -> Result<()>;
    fn get_indicator(&self, indicator_id: &str) -> Result<CostIndicator>;
    fn get_indicator_for_period(&self, year: i32, month: i32) -> Result<Option<CostIndicator>>;
    fn list_indicators(&self, year: Option<i32>) -> Result<Vec<CostIndicator>>;
}
