/// Decimal places for percentage figures (weights, P&L percentages)
pub const PERCENT_SCALE: u32 = 2;

/// Key format for monthly time-series buckets
pub const MONTH_KEY_FORMAT: &str = "%Y-%m";

/// Default decimal places for monetary amounts
pub const DEFAULT_MONEY_SCALE: u32 = 2;

/// Default decimal places for quantities
pub const DEFAULT_QTY_SCALE: u32 = 6;
