use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::decimal_serde_option;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Stock,
    Etf,
    Fund,
    Crypto,
    #[serde(rename = "CASHLIKE")]
    CashLike,
}

impl AssetType {
    /// Classification used by the patrimony breakdown: equity-like assets
    /// form the "renta variable" bucket, everything else is "renta fija".
    pub fn is_equity_like(&self) -> bool {
        matches!(self, AssetType::Stock | AssetType::Etf | AssetType::Crypto)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    /// Assets without a ticker are never shown as tradable positions.
    pub ticker: Option<String>,
    pub asset_type: AssetType,
    pub currency: String,
    /// Latest known market price; None means the asset is unpriced.
    #[serde(with = "decimal_serde_option")]
    pub current_price: Option<Decimal>,
}
