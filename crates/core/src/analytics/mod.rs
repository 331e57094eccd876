mod analytics_model;
mod analytics_service;
mod analytics_traits;

pub use analytics_model::{CostIndicator, CostIndicatorUpdate, NewCostIndicator};
pub use analytics_service::CostIndicatorService;
pub use analytics_traits::{CostIndicatorRepositoryTrait, CostIndicatorServiceTrait};

#[cfg(test)]
mod analytics_model_tests;
