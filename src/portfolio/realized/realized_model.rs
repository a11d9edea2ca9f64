use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::lots::RealizedSale;
use crate::utils::decimal_serde::decimal_serde;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RealizedPnlReport {
    #[serde(with = "decimal_serde")]
    pub realized_pnl_total: Decimal,
    pub realized_sales: Vec<RealizedSale>,
}

/// One calendar year of income: dividend and interest sums supplied by the
/// income collaborators merged with the FIFO sales P&L.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct YearSummary {
    pub year: i32,
    #[serde(with = "decimal_serde")]
    pub dividends_gross: Decimal,
    #[serde(with = "decimal_serde")]
    pub dividends_tax: Decimal,
    #[serde(with = "decimal_serde")]
    pub dividends_net: Decimal,
    #[serde(with = "decimal_serde")]
    pub interests_gross: Decimal,
    #[serde(with = "decimal_serde")]
    pub interests_net: Decimal,
    #[serde(with = "decimal_serde")]
    pub sales_pnl: Decimal,
    #[serde(with = "decimal_serde")]
    pub total_net: Decimal,
}

impl YearSummary {
    pub(crate) fn empty(year: i32) -> Self {
        YearSummary {
            year,
            dividends_gross: Decimal::ZERO,
            dividends_tax: Decimal::ZERO,
            dividends_net: Decimal::ZERO,
            interests_gross: Decimal::ZERO,
            interests_net: Decimal::ZERO,
            sales_pnl: Decimal::ZERO,
            total_net: Decimal::ZERO,
        }
    }
}
