//! Back-office navigation layout.
//!
//! Sections and the models inside them render in a fixed business
//! order rather than alphabetically. Anything not listed here sorts
//! after everything that is.

/// One section of the back-office navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub key: &'static str,
    pub models: &'static [&'static str],
}

/// Sections in display order.
pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        key: "users",
        models: &["user"],
    },
    NavSection {
        key: "employees",
        models: &["employee", "balance_entry", "month_balance", "year_balance"],
    },
    NavSection {
        key: "sales",
        models: &["sale", "product", "buyer"],
    },
    NavSection {
        key: "expenses",
        models: &["expense", "food_product", "raw_material"],
    },
    NavSection {
        key: "finance",
        models: &["cashflow_record", "monthly_cashflow"],
    },
    NavSection {
        key: "analytics",
        models: &["cost_indicator"],
    },
];

/// Display rank of a section. Unknown sections rank last.
pub fn section_rank(key: &str) -> usize {
    NAV_SECTIONS
        .iter()
        .position(|section| section.key == key)
        .unwrap_or(usize::MAX)
}

/// Display rank of a model within its section. Unknown models rank
/// last.
pub fn model_rank(section_key: &str, model: &str) -> usize {
    NAV_SECTIONS
        .iter()
        .find(|section| section.key == section_key)
        .and_then(|section| section.models.iter().position(|name| *name == model))
        .unwrap_or(usize::MAX)
}

/// Sorts section entries into display order. Unknown sections keep
/// their relative order after the known ones.
pub fn sort_sections<T, F>(items: &mut [T], key_fn: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| section_rank(key_fn(a)).cmp(&section_rank(key_fn(b))));
}

/// Sorts model entries of one section into display order.
pub fn sort_models<T, F>(section_key: &str, items: &mut [T], key_fn: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| {
        model_rank(section_key, key_fn(a)).cmp(&model_rank(section_key, key_fn(b)))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_business_order() {
        assert!(section_rank("users") < section_rank("employees"));
        assert!(section_rank("employees") < section_rank("sales"));
        assert!(section_rank("sales") < section_rank("expenses"));
        assert!(section_rank("expenses") < section_rank("finance"));
        assert!(section_rank("finance") < section_rank("analytics"));
    }

    #[test]
    fn test_unknown_section_ranks_last() {
        assert_eq!(section_rank("reports"), usize::MAX);
    }

    #[test]
    fn test_model_rank_within_section() {
        assert!(model_rank("employees", "employee") < model_rank("employees", "balance_entry"));
        assert!(model_rank("sales", "sale") < model_rank("sales", "buyer"));
        assert_eq!(model_rank("sales", "unknown"), usize::MAX);
        assert_eq!(model_rank("unknown", "sale"), usize::MAX);
    }

    #[test]
    fn test_sort_sections_orders_known_before_unknown() {
        let mut keys = vec!["reports", "sales", "users", "employees"];
        sort_sections(&mut keys, |key| key);
        assert_eq!(keys, vec!["users", "employees", "sales", "reports"]);
    }

    #[test]
    fn test_sort_models_uses_section_order() {
        let mut models = vec!["buyer", "sale", "product"];
        sort_models("sales", &mut models, |model| model);
        assert_eq!(models, vec!["sale", "product", "buyer"]);
    }
}
