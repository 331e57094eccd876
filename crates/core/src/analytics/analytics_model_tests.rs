#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::analytics::{CostIndicator, CostIndicatorUpdate};

    #[test]
    fn test_total_costs_sums_all_categories() {
        let indicator = CostIndicator {
            year: 2024,
            month: 3,
            rent: dec!(500),
            electricity: dec!(120.50),
            gas: dec!(60),
            water: dec!(35.25),
            salaries: dec!(2400),
            machine_equipment: dec!(150),
            tools_equipment: dec!(80),
            staff_food: dec!(210),
            ..Default::default()
        };
        assert_eq!(indicator.total_costs(), dec!(3555.75));
    }

    #[test]
    fn test_total_costs_zero_for_empty_indicator() {
        let indicator = CostIndicator::default();
        assert_eq!(indicator.total_costs(), Decimal::ZERO);
    }

    #[test]
    fn test_update_requires_id() {
        let update = CostIndicatorUpdate {
            id: None,
            year: 2024,
            month: 3,
            rent: Some(dec!(500)),
            electricity: None,
            gas: None,
            water: None,
            salaries: None,
            machine_equipment: None,
            tools_equipment: None,
            staff_food: None,
        };
        assert!(update.validate().is_err());
    }
}
