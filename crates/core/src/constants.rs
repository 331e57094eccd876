/// Decimal precision for stored monetary amounts
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Search query key recognized by saved list filters
pub const SEARCH_QUERY_KEY: &str = "q";
