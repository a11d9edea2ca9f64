use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::Asset;
use crate::ledger::Transaction;
use crate::portfolio::holdings::PortfolioView;
use crate::snapshots::{AccountSnapshot, PortfolioSnapshot, PositionSnapshot};
use crate::utils::decimal_serde::decimal_serde;
use std::collections::HashMap;

/// Freshness semantics of one time-series source in the monthly blend.
///
/// - `CarryForward`: a value persists into later months until replaced
///   (cash balances).
/// - `PointInTime`: a month only has a value if an observation falls inside
///   it (portfolio snapshots).
/// - `LiveOverride`: the value is recomputed from current data and replaces
///   any stored observation for the same month (the current month's
///   investments).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeriesMode {
    CarryForward,
    PointInTime,
    LiveOverride,
}

/// One month of the patrimony series. `renta_variable` holds the equity-like
/// share of investments, `renta_fija` the rest.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PatrimonyPoint {
    /// "YYYY-MM"
    pub month: String,
    #[serde(with = "decimal_serde")]
    pub cash: Decimal,
    #[serde(with = "decimal_serde")]
    pub investments: Decimal,
    #[serde(with = "decimal_serde")]
    pub renta_variable: Decimal,
    #[serde(with = "decimal_serde")]
    pub renta_fija: Decimal,
}

/// One point of the raw portfolio-value series.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ValuePoint {
    pub captured_at: NaiveDate,
    #[serde(with = "decimal_serde")]
    pub value: Decimal,
}

/// Everything the reconciler blends: the ordered ledger, asset reference
/// data, the three snapshot series, and the live positions view for the
/// current month.
pub struct PatrimonyInputs<'a> {
    pub transactions: &'a [Transaction],
    pub assets: &'a HashMap<String, Asset>,
    pub portfolio_snapshots: &'a [PortfolioSnapshot],
    pub position_snapshots: &'a [PositionSnapshot],
    pub account_snapshots: &'a [AccountSnapshot],
    pub live: &'a PortfolioView,
}
