use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::{decimal_serde, decimal_serde_option};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Buy,
    Sell,
    Gift,
}

/// Immutable ledger entry. Quantity is always stored positive; direction is
/// carried by `tx_type`. The canonical processing order is `(date, seq)`,
/// where `seq` is the monotonic creation sequence breaking same-date ties.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub tx_type: TransactionType,
    pub asset_id: String,
    pub account_id: String,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde_option")]
    pub price: Option<Decimal>,
    #[serde(with = "decimal_serde")]
    pub commission: Decimal,
    #[serde(with = "decimal_serde")]
    pub tax: Decimal,
    pub seq: i64,
}

impl Transaction {
    /// Ordering key mandated by the engine contract.
    pub fn ordering_key(&self) -> (NaiveDate, i64) {
        (self.date, self.seq)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Dividend {
    pub id: String,
    pub date: NaiveDate,
    pub asset_id: String,
    #[serde(with = "decimal_serde")]
    pub gross: Decimal,
    #[serde(with = "decimal_serde")]
    pub tax: Decimal,
    #[serde(with = "decimal_serde")]
    pub net: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub id: String,
    pub date: NaiveDate,
    pub account_id: String,
    #[serde(with = "decimal_serde")]
    pub gross: Decimal,
    #[serde(with = "decimal_serde")]
    pub net: Decimal,
}

/// Per-year dividend sums, supplied pre-aggregated by the income collaborator.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DividendYearTotal {
    pub year: i32,
    #[serde(with = "decimal_serde")]
    pub gross: Decimal,
    #[serde(with = "decimal_serde")]
    pub tax: Decimal,
    #[serde(with = "decimal_serde")]
    pub net: Decimal,
}

/// Per-year interest sums, supplied pre-aggregated by the income collaborator.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InterestYearTotal {
    pub year: i32,
    #[serde(with = "decimal_serde")]
    pub gross: Decimal,
    #[serde(with = "decimal_serde")]
    pub net: Decimal,
}
