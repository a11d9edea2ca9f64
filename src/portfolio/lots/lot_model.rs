use std::collections::{HashMap, VecDeque};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::decimal_serde;

/// A quantity of one asset acquired at a specific unit cost, held until fully
/// consumed by sales. `account_id` is the account the shares were bought
/// into, used later to pick a position's primary account.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenLot {
    pub quantity: Decimal,
    pub unit_cost: Decimal,
    pub account_id: String,
}

/// FIFO queue of open lots for one asset. Oldest lot is always consumed
/// first.
#[derive(Debug, Clone, Default)]
pub struct LotBook {
    lots: VecDeque<OpenLot>,
}

impl LotBook {
    pub fn push(&mut self, lot: OpenLot) {
        self.lots.push_back(lot);
    }

    /// Consumes up to `quantity` from the head of the queue and returns
    /// `(consumed_quantity, cost_basis)` at full precision. Exhausted lots
    /// are popped. When the book empties before the request is satisfied the
    /// shortfall simply stays unconsumed; the caller decides what that means.
    pub fn consume(&mut self, quantity: Decimal) -> (Decimal, Decimal) {
        let mut remaining = quantity;
        let mut cost_basis = Decimal::ZERO;

        while remaining > Decimal::ZERO {
            let Some(head) = self.lots.front_mut() else {
                break;
            };
            let consumed = remaining.min(head.quantity);
            cost_basis += consumed * head.unit_cost;
            head.quantity -= consumed;
            remaining -= consumed;
            if head.quantity <= Decimal::ZERO {
                self.lots.pop_front();
            }
        }

        (quantity - remaining, cost_basis)
    }

    /// Remaining quantity across all open lots.
    pub fn total_quantity(&self) -> Decimal {
        self.lots.iter().map(|lot| lot.quantity).sum()
    }

    /// Remaining cost across all open lots (Σ qty * unit_cost), unrounded.
    pub fn total_cost(&self) -> Decimal {
        self.lots
            .iter()
            .map(|lot| lot.quantity * lot.unit_cost)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpenLot> {
        self.lots.iter()
    }
}

/// One record per SELL transaction, a pure function of the ledger prefix up
/// to that sale. Monetary fields are quantized to the money scale,
/// percentages to two places.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RealizedSale {
    pub date: NaiveDate,
    pub asset_id: String,
    pub asset_name: String,
    pub asset_ticker: Option<String>,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde")]
    pub cost_basis: Decimal,
    #[serde(with = "decimal_serde")]
    pub proceeds: Decimal,
    #[serde(with = "decimal_serde")]
    pub realized_pnl: Decimal,
    #[serde(with = "decimal_serde")]
    pub realized_pnl_pct: Decimal,
}

/// Terminal state of one FIFO pass: the open-lot book per asset plus the
/// realized sales in ledger order.
#[derive(Debug, Default)]
pub struct FifoOutcome {
    pub lot_books: HashMap<String, LotBook>,
    pub realized_sales: Vec<RealizedSale>,
}
