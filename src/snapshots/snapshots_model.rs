//! Read-only historical facts persisted by the external snapshot scheduler.
//! The engine never creates or mutates these records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::decimal_serde::decimal_serde;

/// Total portfolio value captured at one point in time. All position rows of
/// the same capture share its `batch_id`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub captured_at: NaiveDate,
    pub batch_id: Uuid,
    #[serde(with = "decimal_serde")]
    pub total_market_value: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PositionSnapshot {
    pub batch_id: Uuid,
    pub asset_id: String,
    #[serde(with = "decimal_serde")]
    pub market_value: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountSnapshot {
    pub account_id: String,
    pub date: NaiveDate,
    #[serde(with = "decimal_serde")]
    pub balance: Decimal,
}
