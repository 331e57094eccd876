//! Tests for balance ledger domain models.

#[cfg(test)]
mod tests {
    use crate::balances::{BalanceEntry, BalanceEntryUpdate, NewBalanceEntry};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn march_5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_net_balance_is_earned_minus_paid() {
        let entry = BalanceEntry {
            earned_amount: dec!(1000),
            paid_amount: dec!(400),
            ..Default::default()
        };
        assert_eq!(entry.net_balance(), dec!(600));
    }

    #[test]
    fn test_net_balance_can_be_negative() {
        let entry = BalanceEntry {
            earned_amount: dec!(100),
            paid_amount: dec!(250),
            ..Default::default()
        };
        assert_eq!(entry.net_balance(), dec!(-150));
    }

    #[test]
    fn test_new_entry_requires_employee() {
        let entry = NewBalanceEntry {
            id: None,
            employee_id: "  ".to_string(),
            date: march_5(),
            earned_amount: Some(dec!(1000)),
            paid_amount: None,
            description: None,
        };
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_new_entry_amounts_may_be_absent() {
        // Absent amounts are stored as zero, not rejected.
        let entry = NewBalanceEntry {
            id: None,
            employee_id: "emp-1".to_string(),
            date: march_5(),
            earned_amount: None,
            paid_amount: None,
            description: None,
        };
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_entry_update_requires_id() {
        let update = BalanceEntryUpdate {
            id: None,
            employee_id: "emp-1".to_string(),
            date: march_5(),
            earned_amount: Some(dec!(1000)),
            paid_amount: Some(dec!(400)),
            description: None,
        };
        assert!(update.validate().is_err());
    }
}
