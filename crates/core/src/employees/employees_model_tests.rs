//! Tests for employee domain models.

#[cfg(test)]
mod tests {
    use crate::employees::{EmployeeUpdate, NewEmployee, SalaryType};
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn create_new_employee(user_id: &str, full_name: &str) -> NewEmployee {
        NewEmployee {
            id: None,
            user_id: user_id.to_string(),
            full_name: full_name.to_string(),
            phone_number: None,
            position: "baker".to_string(),
            salary_type: SalaryType::Fixed,
            base_salary: Some(dec!(3000000)),
        }
    }

    #[test]
    fn test_salary_type_round_trip() {
        for salary_type in [SalaryType::Fixed, SalaryType::Hourly, SalaryType::Piecework] {
            assert_eq!(
                SalaryType::from_str(salary_type.as_str()).unwrap(),
                salary_type
            );
        }
    }

    #[test]
    fn test_salary_type_rejects_unknown() {
        assert!(SalaryType::from_str("commission").is_err());
    }

    #[test]
    fn test_salary_type_default_is_fixed() {
        assert_eq!(SalaryType::default(), SalaryType::Fixed);
    }

    #[test]
    fn test_salary_type_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&SalaryType::Piecework).unwrap(),
            "\"piecework\""
        );
        assert_eq!(
            serde_json::from_str::<SalaryType>("\"hourly\"").unwrap(),
            SalaryType::Hourly
        );
    }

    #[test]
    fn test_new_employee_requires_user() {
        let employee = create_new_employee("", "Aziz Rahimov");
        assert!(employee.validate().is_err());
    }

    #[test]
    fn test_new_employee_requires_full_name() {
        let employee = create_new_employee("user-1", "   ");
        assert!(employee.validate().is_err());
    }

    #[test]
    fn test_new_employee_valid() {
        let employee = create_new_employee("user-1", "Aziz Rahimov");
        assert!(employee.validate().is_ok());
    }

    #[test]
    fn test_employee_update_requires_id() {
        let update = EmployeeUpdate {
            id: None,
            user_id: "user-1".to_string(),
            full_name: "Aziz Rahimov".to_string(),
            phone_number: None,
            position: "baker".to_string(),
            salary_type: SalaryType::Hourly,
            base_salary: None,
        };
        assert!(update.validate().is_err());
    }
}
