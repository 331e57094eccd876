//! Tests for user domain models.

#[cfg(test)]
mod tests {
    use crate::users::{NewUser, User, UserUpdate};
    use chrono::NaiveDateTime;

    fn create_test_user(first_name: &str, last_name: &str, username: &str) -> User {
        User {
            id: "user-1".to_string(),
            username: username.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: String::new(),
            phone_number: None,
            is_worker: false,
            is_manager: false,
            is_active: true,
            date_joined: NaiveDateTime::default(),
        }
    }

    fn create_new_user(username: &str) -> NewUser {
        NewUser {
            id: None,
            username: username.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone_number: None,
            is_worker: false,
            is_manager: false,
            is_active: true,
        }
    }

    #[test]
    fn test_display_name_uses_full_name() {
        let user = create_test_user("Anna", "Karimova", "anna");
        assert_eq!(user.display_name(), "Anna Karimova");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = create_test_user("", "", "anna");
        assert_eq!(user.display_name(), "anna");
    }

    #[test]
    fn test_display_name_trims_partial_names() {
        let user = create_test_user("Anna", "", "anna");
        assert_eq!(user.display_name(), "Anna");
    }

    #[test]
    fn test_new_user_requires_username() {
        let user = create_new_user("  ");
        assert!(user.validate().is_err());

        let user = create_new_user("anna");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_user_update_requires_id() {
        let update = UserUpdate {
            id: None,
            username: "anna".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone_number: None,
            is_worker: false,
            is_manager: false,
            is_active: true,
        };
        assert!(update.validate().is_err());
    }
}
