#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::finance::{CashflowRecord, CashflowRecordUpdate, CashflowTotals, MonthlyCashflow};

    #[test]
    fn test_record_net_profit() {
        let record = CashflowRecord {
            income_amount: dec!(900),
            expense_amount: dec!(350),
            ..Default::default()
        };
        assert_eq!(record.net_profit(), dec!(550));
    }

    #[test]
    fn test_totals_accumulate() {
        let totals = CashflowTotals::from_amounts(vec![
            (dec!(500), dec!(100)),
            (dec!(400), dec!(250)),
        ]);
        assert_eq!(totals.total_income, dec!(900));
        assert_eq!(totals.total_expense, dec!(350));
        assert_eq!(totals.net_profit(), dec!(550));
        assert!(totals.has_activity());
    }

    #[test]
    fn test_empty_month_has_no_activity() {
        let totals = CashflowTotals::from_amounts(Vec::new());
        assert!(!totals.has_activity());
        assert!(MonthlyCashflow::from_totals(2024, 3, totals).is_none());
    }

    #[test]
    fn test_zero_amount_month_keeps_no_row() {
        let totals = CashflowTotals::from_amounts(vec![(Decimal::ZERO, Decimal::ZERO)]);
        assert!(MonthlyCashflow::from_totals(2024, 3, totals).is_none());
    }

    #[test]
    fn test_monthly_row_built_from_totals() {
        let totals = CashflowTotals::from_amounts(vec![(dec!(1200), dec!(700))]);
        let monthly =
            MonthlyCashflow::from_totals(2024, 3, totals).expect("month with activity keeps a row");
        assert_eq!(monthly.year, 2024);
        assert_eq!(monthly.month, 3);
        assert_eq!(monthly.total_income, dec!(1200));
        assert_eq!(monthly.total_expense, dec!(700));
        assert_eq!(monthly.net_profit, dec!(500));
        assert!(!monthly.id.is_empty());
    }

    #[test]
    fn test_expense_only_month_keeps_row_with_loss() {
        let totals = CashflowTotals::from_amounts(vec![(Decimal::ZERO, dec!(80))]);
        let monthly = MonthlyCashflow::from_totals(2024, 7, totals)
            .expect("expense-only month keeps a row");
        assert_eq!(monthly.net_profit, dec!(-80));
    }

    #[test]
    fn test_recompute_assigns_fresh_id() {
        let totals = CashflowTotals::from_amounts(vec![(dec!(10), Decimal::ZERO)]);
        let first = MonthlyCashflow::from_totals(2024, 1, totals).unwrap();
        let second = MonthlyCashflow::from_totals(2024, 1, totals).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_update_requires_id() {
        let update = CashflowRecordUpdate {
            id: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            income_amount: Some(dec!(100)),
            expense_amount: None,
            description: None,
        };
        assert!(update.validate().is_err());
    }
}
