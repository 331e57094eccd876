//! Pure aggregation arithmetic for balance statistics.
//!
//! The storage layer loads the ledger rows for a scope, folds them through
//! [`PeriodTotals`], and stores the row produced by `from_totals` (or none).
//! Keeping the arithmetic here keeps it exact (`Decimal`, no SQL float
//! summing) and testable without a database.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::balances_model::{MonthBalance, YearBalance};

/// Running earned/paid totals for one (employee, period) scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodTotals {
    pub total_earned: Decimal,
    pub total_paid: Decimal,
}

impl PeriodTotals {
    /// Folds one ledger entry into the totals.
    pub fn add_entry(&mut self, earned: Decimal, paid: Decimal) {
        self.total_earned += earned;
        self.total_paid += paid;
    }

    /// Sums a set of (earned, paid) amounts.
    pub fn from_amounts<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = (Decimal, Decimal)>,
    {
        let mut totals = Self::default();
        for (earned, paid) in amounts {
            totals.add_entry(earned, paid);
        }
        totals
    }

    pub fn net_balance(&self) -> Decimal {
        self.total_earned - self.total_paid
    }

    /// Whether an aggregate row should be stored for this scope.
    ///
    /// A scope whose totals are both exactly zero keeps no row. Negative
    /// totals (corrections) still count as activity.
    pub fn has_activity(&self) -> bool {
        !self.total_earned.is_zero() || !self.total_paid.is_zero()
    }
}

impl MonthBalance {
    /// Builds the replacement statistics row for a month scope.
    ///
    /// Returns `None` when the scope has no activity, in which case no row
    /// is stored. Each recompute produces a fresh row id; nothing
    /// references statistics rows, so id churn is unobservable.
    pub fn from_totals(
        employee_id: &str,
        year: i32,
        month: i32,
        totals: &PeriodTotals,
        is_closed: bool,
    ) -> Option<Self> {
        if !totals.has_activity() {
            return None;
        }
        Some(MonthBalance {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            year,
            month,
            total_earned: totals.total_earned,
            total_paid: totals.total_paid,
            net_balance: totals.net_balance(),
            is_closed,
        })
    }
}

impl YearBalance {
    /// Builds the replacement statistics row for a year scope.
    ///
    /// Returns `None` when the scope has no activity.
    pub fn from_totals(employee_id: &str, year: i32, totals: &PeriodTotals) -> Option<Self> {
        if !totals.has_activity() {
            return None;
        }
        Some(YearBalance {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            year,
            total_earned: totals.total_earned,
            total_paid: totals.total_paid,
            net_balance: totals.net_balance(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_totals_accumulate_and_net() {
        let totals = PeriodTotals::from_amounts(vec![
            (dec!(1000), dec!(400)),
            (dec!(250.50), dec!(0)),
            (dec!(0), dec!(100)),
        ]);
        assert_eq!(totals.total_earned, dec!(1250.50));
        assert_eq!(totals.total_paid, dec!(500));
        assert_eq!(totals.net_balance(), dec!(750.50));
    }

    #[test]
    fn test_empty_totals_have_no_activity() {
        let totals = PeriodTotals::default();
        assert!(!totals.has_activity());
    }

    #[test]
    fn test_zero_sum_totals_have_no_activity() {
        let totals = PeriodTotals::from_amounts(vec![(dec!(0), dec!(0)), (dec!(0), dec!(0))]);
        assert!(!totals.has_activity());
    }

    #[test]
    fn test_negative_totals_still_count_as_activity() {
        let totals = PeriodTotals::from_amounts(vec![(dec!(-100), dec!(0))]);
        assert!(totals.has_activity());
        let balance = MonthBalance::from_totals("emp-1", 2024, 3, &totals, false).unwrap();
        assert_eq!(balance.net_balance, dec!(-100));
    }

    #[test]
    fn test_month_balance_absent_for_zero_scope() {
        let totals = PeriodTotals::default();
        assert!(MonthBalance::from_totals("emp-1", 2024, 3, &totals, false).is_none());
    }

    #[test]
    fn test_month_balance_built_from_totals() {
        let totals = PeriodTotals::from_amounts(vec![(dec!(1000), dec!(400))]);
        let balance = MonthBalance::from_totals("emp-1", 2024, 3, &totals, false).unwrap();
        assert_eq!(balance.employee_id, "emp-1");
        assert_eq!(balance.year, 2024);
        assert_eq!(balance.month, 3);
        assert_eq!(balance.total_earned, dec!(1000));
        assert_eq!(balance.total_paid, dec!(400));
        assert_eq!(balance.net_balance, dec!(600));
        assert!(!balance.is_closed);
    }

    #[test]
    fn test_month_balance_keeps_closed_flag() {
        let totals = PeriodTotals::from_amounts(vec![(dec!(10), dec!(0))]);
        let balance = MonthBalance::from_totals("emp-1", 2024, 3, &totals, true).unwrap();
        assert!(balance.is_closed);
    }

    #[test]
    fn test_paid_only_scope_still_stored() {
        // Advances with nothing earned yet must still show up.
        let totals = PeriodTotals::from_amounts(vec![(dec!(0), dec!(200))]);
        assert!(totals.has_activity());
        let balance = MonthBalance::from_totals("emp-1", 2024, 3, &totals, false).unwrap();
        assert_eq!(balance.net_balance, dec!(-200));
    }

    #[test]
    fn test_year_balance_built_from_totals() {
        let totals = PeriodTotals::from_amounts(vec![(dec!(1000), dec!(400))]);
        let balance = YearBalance::from_totals("emp-1", 2024, &totals).unwrap();
        assert_eq!(balance.year, 2024);
        assert_eq!(balance.net_balance, dec!(600));
    }

    #[test]
    fn test_fresh_id_per_recompute() {
        let totals = PeriodTotals::from_amounts(vec![(dec!(1), dec!(0))]);
        let first = MonthBalance::from_totals("emp-1", 2024, 3, &totals, false).unwrap();
        let second = MonthBalance::from_totals("emp-1", 2024, 3, &totals, false).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.total_earned, second.total_earned);
    }
}
