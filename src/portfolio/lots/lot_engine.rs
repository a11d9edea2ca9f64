use std::collections::HashMap;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::assets::Asset;
use crate::errors::Result;
use crate::ledger::{Transaction, TransactionType};
use crate::portfolio::portfolio_errors::CalculatorError;
use crate::settings::{GiftCostMode, ValuationSettings};
use crate::utils::rounding::{percent_of, quantize};

use super::lot_model::{FifoOutcome, OpenLot, RealizedSale};

/// Single forward pass over the ordered transaction ledger.
///
/// Maintains one FIFO lot book per asset: BUY and GIFT append lots, SELL
/// consumes from the head and emits a `RealizedSale`. The caller must supply
/// transactions already ordered by `(date, seq)`; processing the same ledger
/// in a different order produces different results.
pub fn process_ledger(
    transactions: &[Transaction],
    assets: &HashMap<String, Asset>,
    settings: &ValuationSettings,
) -> Result<FifoOutcome> {
    debug!(
        "Processing {} ledger transactions (gift cost mode {:?})",
        transactions.len(),
        settings.gift_cost_mode
    );

    let mut outcome = FifoOutcome::default();

    for tx in transactions {
        // Quantities are stored positive; direction lives in the type. A
        // negative quantity is a broken contract, not a short position.
        if tx.quantity < Decimal::ZERO {
            return Err(CalculatorError::InvalidTransaction(format!(
                "transaction {} has negative quantity {}",
                tx.id, tx.quantity
            ))
            .into());
        }

        let book = outcome.lot_books.entry(tx.asset_id.clone()).or_default();
        let price = tx.price.unwrap_or(Decimal::ZERO);

        match tx.tx_type {
            TransactionType::Buy => {
                // Zero-quantity entries are degenerate input; never divide by zero.
                let unit_cost = if tx.quantity.is_zero() {
                    Decimal::ZERO
                } else {
                    price + (tx.commission + tx.tax) / tx.quantity
                };
                book.push(OpenLot {
                    quantity: tx.quantity,
                    unit_cost,
                    account_id: tx.account_id.clone(),
                });
            }
            TransactionType::Gift => {
                let unit_cost = match settings.gift_cost_mode {
                    GiftCostMode::Market => price,
                    GiftCostMode::Zero => Decimal::ZERO,
                };
                book.push(OpenLot {
                    quantity: tx.quantity,
                    unit_cost,
                    account_id: tx.account_id.clone(),
                });
            }
            TransactionType::Sell => {
                let (consumed, cost_basis) = book.consume(tx.quantity);
                if consumed < tx.quantity {
                    // Oversold: the unmatched remainder enters at zero cost
                    // basis. Lenient on purpose; the ledger is the caller's
                    // data-integrity problem.
                    warn!(
                        "Sale {} of asset {} exceeds open lots by {}; remainder gets zero cost basis",
                        tx.id,
                        tx.asset_id,
                        tx.quantity - consumed
                    );
                }

                let cost_basis = quantize(cost_basis, settings.rounding_money);
                let proceeds = quantize(
                    price * tx.quantity - tx.commission - tx.tax,
                    settings.rounding_money,
                );
                let pnl = quantize(proceeds - cost_basis, settings.rounding_money);
                let pnl_pct = percent_of(pnl, cost_basis);

                let (asset_name, asset_ticker) = match assets.get(&tx.asset_id) {
                    Some(asset) => (asset.name.clone(), asset.ticker.clone()),
                    None => {
                        warn!("Sale {} references unknown asset {}", tx.id, tx.asset_id);
                        (tx.asset_id.clone(), None)
                    }
                };

                outcome.realized_sales.push(RealizedSale {
                    date: tx.date,
                    asset_id: tx.asset_id.clone(),
                    asset_name,
                    asset_ticker,
                    quantity: quantize(tx.quantity, settings.rounding_qty),
                    cost_basis,
                    proceeds,
                    realized_pnl: pnl,
                    realized_pnl_pct: pnl_pct,
                });
            }
        }
    }

    Ok(outcome)
}
