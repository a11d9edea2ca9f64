use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MONEY_SCALE, DEFAULT_QTY_SCALE};

/// Cost-basis accounting method. Only FIFO is supported.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostBasisMethod {
    Fifo,
}

/// How gifted shares enter the lot book: with zero cost basis, or at the
/// market price recorded on the gift transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GiftCostMode {
    Zero,
    Market,
}

/// Engine configuration. There is no global settings state; callers pass a
/// value into every engine entry point.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSettings {
    pub base_currency: String,
    pub cost_basis_method: CostBasisMethod,
    pub gift_cost_mode: GiftCostMode,
    /// Decimal places for monetary amounts
    pub rounding_money: u32,
    /// Decimal places for quantities
    pub rounding_qty: u32,
}

impl Default for ValuationSettings {
    fn default() -> Self {
        Self {
            base_currency: "EUR".to_string(),
            cost_basis_method: CostBasisMethod::Fifo,
            gift_cost_mode: GiftCostMode::Zero,
            rounding_money: DEFAULT_MONEY_SCALE,
            rounding_qty: DEFAULT_QTY_SCALE,
        }
    }
}
