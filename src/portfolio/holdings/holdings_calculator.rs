use std::collections::{BTreeMap, HashMap};

use log::debug;
use rust_decimal::Decimal;

use crate::accounts::Account;
use crate::assets::Asset;
use crate::settings::ValuationSettings;
use crate::utils::rounding::{percent_of, quantize};

use super::holdings_model::{CashAccountView, PortfolioView, PositionView};
use crate::portfolio::lots::LotBook;

/// Builds the positions view from the terminal open-lot state, current
/// prices and account balances.
///
/// Assets whose rounded quantity is zero, that have no ticker, or no current
/// price are excluded: "not a tradable, priced position" is a valid state,
/// not an error. Per-position figures are quantized to the settings scales;
/// totals are summed over those exact values and quantized once at output.
pub fn build_portfolio(
    lot_books: &HashMap<String, LotBook>,
    assets: &HashMap<String, Asset>,
    accounts: &[Account],
    settings: &ValuationSettings,
) -> PortfolioView {
    let money_scale = settings.rounding_money;
    let qty_scale = settings.rounding_qty;

    let mut positions: Vec<PositionView> = Vec::new();
    let mut total_market_value = Decimal::ZERO;

    // Walk assets in id order so ties in the final sort land deterministically.
    let mut books: Vec<(&String, &LotBook)> = lot_books.iter().collect();
    books.sort_by(|a, b| a.0.cmp(b.0));

    for (asset_id, book) in books {
        let raw_quantity = book.total_quantity();
        let cost_total = book.total_cost();

        let quantity = quantize(raw_quantity, qty_scale);
        if quantity <= Decimal::ZERO {
            continue;
        }
        let Some(asset) = assets.get(asset_id) else {
            debug!("No asset record for {}; excluding from positions", asset_id);
            continue;
        };
        let Some(ticker) = asset.ticker.as_ref().filter(|t| !t.is_empty()) else {
            continue;
        };
        let Some(current_price) = asset.current_price.filter(|p| !p.is_zero()) else {
            continue;
        };

        let account_id = primary_account(book);

        let cost_total_r = quantize(cost_total, money_scale);
        let avg_cost = quantize(cost_total / raw_quantity, money_scale);
        let market_value = quantize(quantity * current_price, money_scale);
        let unrealized_pnl = quantize(market_value - cost_total_r, money_scale);
        let unrealized_pnl_pct = percent_of(unrealized_pnl, cost_total_r);
        total_market_value += market_value;

        positions.push(PositionView {
            asset_id: asset_id.clone(),
            asset_name: asset.name.clone(),
            asset_ticker: ticker.clone(),
            asset_type: asset.asset_type,
            account_id,
            quantity,
            avg_cost,
            cost_total: cost_total_r,
            current_price,
            market_value,
            unrealized_pnl,
            unrealized_pnl_pct,
            weight_pct: Decimal::ZERO,
        });
    }

    for position in &mut positions {
        position.weight_pct = percent_of(position.market_value, total_market_value);
    }

    // Stable sort: equal market values keep their relative order.
    positions.sort_by(|a, b| b.market_value.cmp(&a.market_value));

    let total_cost: Decimal = positions.iter().map(|p| p.cost_total).sum();
    let total_unrealized_pnl: Decimal = positions.iter().map(|p| p.unrealized_pnl).sum();

    let mut cash_accounts: Vec<CashAccountView> = Vec::new();
    let mut total_cash = Decimal::ZERO;
    for account in accounts {
        if account.balance.is_zero() {
            continue;
        }
        total_cash += account.balance;
        cash_accounts.push(CashAccountView {
            account_id: account.id.clone(),
            account_name: account.name.clone(),
            account_type: account.account_type,
            balance: quantize(account.balance, money_scale),
        });
    }

    let grand_total = total_market_value + total_cash;

    PortfolioView {
        total_market_value: quantize(total_market_value, money_scale),
        total_cost: quantize(total_cost, money_scale),
        total_unrealized_pnl: quantize(total_unrealized_pnl, money_scale),
        total_cash: quantize(total_cash, money_scale),
        grand_total: quantize(grand_total, money_scale),
        accounts: cash_accounts,
        positions,
    }
}

/// The account holding the largest aggregate remaining quantity among the
/// asset's open lots. Aggregation goes through a BTreeMap and the maximum is
/// taken with a strict comparison, so ties resolve to the smallest account
/// id.
fn primary_account(book: &LotBook) -> Option<String> {
    let mut per_account: BTreeMap<&str, Decimal> = BTreeMap::new();
    for lot in book.iter() {
        if lot.quantity > Decimal::ZERO {
            *per_account.entry(lot.account_id.as_str()).or_default() += lot.quantity;
        }
    }

    let mut best: Option<(&str, Decimal)> = None;
    for (account_id, quantity) in per_account {
        match best {
            Some((_, best_qty)) if quantity <= best_qty => {}
            _ => best = Some((account_id, quantity)),
        }
    }
    best.map(|(account_id, _)| account_id.to_string())
}
