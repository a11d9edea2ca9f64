use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::AccountType;
use crate::assets::AssetType;
use crate::utils::decimal_serde::decimal_serde;

/// One priced, tradable position derived from the terminal open-lot state.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PositionView {
    pub asset_id: String,
    pub asset_name: String,
    pub asset_ticker: String,
    pub asset_type: AssetType,
    /// Account holding the largest remaining quantity of this asset.
    pub account_id: Option<String>,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde")]
    pub avg_cost: Decimal,
    #[serde(with = "decimal_serde")]
    pub cost_total: Decimal,
    #[serde(with = "decimal_serde")]
    pub current_price: Decimal,
    #[serde(with = "decimal_serde")]
    pub market_value: Decimal,
    #[serde(with = "decimal_serde")]
    pub unrealized_pnl: Decimal,
    #[serde(with = "decimal_serde")]
    pub unrealized_pnl_pct: Decimal,
    #[serde(with = "decimal_serde")]
    pub weight_pct: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CashAccountView {
    pub account_id: String,
    pub account_name: String,
    pub account_type: AccountType,
    #[serde(with = "decimal_serde")]
    pub balance: Decimal,
}

/// The full positions view: positions sorted by market value descending,
/// non-zero cash accounts, and portfolio totals.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    #[serde(with = "decimal_serde")]
    pub total_market_value: Decimal,
    #[serde(with = "decimal_serde")]
    pub total_cost: Decimal,
    #[serde(with = "decimal_serde")]
    pub total_unrealized_pnl: Decimal,
    #[serde(with = "decimal_serde")]
    pub total_cash: Decimal,
    #[serde(with = "decimal_serde")]
    pub grand_total: Decimal,
    pub accounts: Vec<CashAccountView>,
    pub positions: Vec<PositionView>,
}
