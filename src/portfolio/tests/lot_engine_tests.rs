use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::common::*;
use crate::assets::AssetType;
use crate::portfolio::lots::process_ledger;
use crate::settings::{GiftCostMode, ValuationSettings};

fn default_assets() -> std::collections::HashMap<String, crate::assets::Asset> {
    asset_map(vec![asset(
        "AAPL",
        Some("AAPL"),
        AssetType::Stock,
        Some(dec!(150.00)),
    )])
}

#[test]
fn buy_spreads_commission_and_tax_over_unit_cost() {
    let txs = vec![buy(1, "2024-01-01", "AAPL", dec!(10), dec!(100), dec!(1))];
    let outcome = process_ledger(&txs, &default_assets(), &ValuationSettings::default()).unwrap();

    let book = &outcome.lot_books["AAPL"];
    assert_eq!(book.total_quantity(), dec!(10));
    assert_eq!(book.total_cost(), dec!(1001.0));
    assert!(outcome.realized_sales.is_empty());
}

#[test]
fn zero_quantity_buy_gets_zero_unit_cost() {
    let txs = vec![buy(1, "2024-01-01", "AAPL", dec!(0), dec!(100), dec!(5))];
    let outcome = process_ledger(&txs, &default_assets(), &ValuationSettings::default()).unwrap();

    assert_eq!(outcome.lot_books["AAPL"].total_cost(), Decimal::ZERO);
}

#[test]
fn sell_consumes_oldest_lot_first() {
    let txs = vec![
        buy(1, "2024-01-01", "AAPL", dec!(5), dec!(100), dec!(0)),
        buy(2, "2024-01-02", "AAPL", dec!(5), dec!(200), dec!(0)),
        sell(3, "2024-02-01", "AAPL", dec!(5), dec!(250), dec!(0)),
    ];
    let outcome = process_ledger(&txs, &default_assets(), &ValuationSettings::default()).unwrap();

    let sale = &outcome.realized_sales[0];
    assert_eq!(sale.cost_basis.to_string(), "500.00");
    assert_eq!(sale.proceeds.to_string(), "1250.00");
    assert_eq!(sale.realized_pnl.to_string(), "750.00");
    assert_eq!(sale.realized_pnl_pct.to_string(), "150.00");

    // Only the 200-cost lot remains.
    let book = &outcome.lot_books["AAPL"];
    assert_eq!(book.total_quantity(), dec!(5));
    assert_eq!(book.total_cost(), dec!(1000));
}

#[test]
fn sell_spanning_lots_blends_cost_basis() {
    let txs = vec![
        buy(1, "2024-01-01", "AAPL", dec!(5), dec!(100), dec!(0)),
        buy(2, "2024-01-02", "AAPL", dec!(5), dec!(200), dec!(0)),
        sell(3, "2024-02-01", "AAPL", dec!(8), dec!(150), dec!(0)),
    ];
    let outcome = process_ledger(&txs, &default_assets(), &ValuationSettings::default()).unwrap();

    // 5 @ 100 + 3 @ 200
    assert_eq!(outcome.realized_sales[0].cost_basis.to_string(), "1100.00");
    assert_eq!(outcome.lot_books["AAPL"].total_quantity(), dec!(2));
}

#[test]
fn gift_enters_at_zero_cost_under_zero_mode() {
    let txs = vec![gift(1, "2024-01-01", "AAPL", dec!(10), dec!(50))];
    let outcome = process_ledger(&txs, &default_assets(), &ValuationSettings::default()).unwrap();

    assert_eq!(outcome.lot_books["AAPL"].total_cost(), Decimal::ZERO);
    assert_eq!(outcome.lot_books["AAPL"].total_quantity(), dec!(10));
}

#[test]
fn gift_enters_at_market_price_under_market_mode() {
    let settings = ValuationSettings {
        gift_cost_mode: GiftCostMode::Market,
        ..ValuationSettings::default()
    };
    let txs = vec![gift(1, "2024-01-01", "AAPL", dec!(10), dec!(50))];
    let outcome = process_ledger(&txs, &default_assets(), &settings).unwrap();

    assert_eq!(outcome.lot_books["AAPL"].total_cost(), dec!(500));
}

#[test]
fn selling_a_zero_cost_gift_reports_zero_pct() {
    let txs = vec![
        gift(1, "2024-01-01", "AAPL", dec!(10), dec!(50)),
        sell(2, "2024-02-01", "AAPL", dec!(10), dec!(60), dec!(0)),
    ];
    let outcome = process_ledger(&txs, &default_assets(), &ValuationSettings::default()).unwrap();

    let sale = &outcome.realized_sales[0];
    assert_eq!(sale.cost_basis.to_string(), "0.00");
    assert_eq!(sale.realized_pnl.to_string(), "600.00");
    assert_eq!(sale.realized_pnl_pct.to_string(), "0.00");
}

#[test]
fn oversold_remainder_contributes_zero_cost() {
    let txs = vec![
        buy(1, "2024-01-01", "AAPL", dec!(5), dec!(100), dec!(0)),
        sell(2, "2024-02-01", "AAPL", dec!(10), dec!(100), dec!(0)),
    ];
    let outcome = process_ledger(&txs, &default_assets(), &ValuationSettings::default()).unwrap();

    let sale = &outcome.realized_sales[0];
    assert_eq!(sale.cost_basis.to_string(), "500.00");
    assert_eq!(sale.proceeds.to_string(), "1000.00");
    assert_eq!(sale.realized_pnl.to_string(), "500.00");
    assert!(outcome.lot_books["AAPL"].is_empty());
}

#[test]
fn proceeds_round_half_up() {
    let txs = vec![
        buy(1, "2024-01-01", "AAPL", dec!(10), dec!(100), dec!(0)),
        sell(2, "2024-02-01", "AAPL", dec!(10), dec!(123.4565), dec!(0)),
    ];
    let outcome = process_ledger(&txs, &default_assets(), &ValuationSettings::default()).unwrap();

    assert_eq!(outcome.realized_sales[0].proceeds.to_string(), "1234.57");
}

#[test]
fn processing_order_changes_results() {
    let early_sell = vec![
        buy(1, "2024-01-01", "AAPL", dec!(5), dec!(100), dec!(0)),
        sell(2, "2024-01-05", "AAPL", dec!(5), dec!(150), dec!(0)),
        buy(3, "2024-01-10", "AAPL", dec!(5), dec!(200), dec!(0)),
    ];
    let late_sell = vec![
        buy(1, "2024-01-01", "AAPL", dec!(5), dec!(100), dec!(0)),
        buy(2, "2024-01-05", "AAPL", dec!(5), dec!(200), dec!(0)),
        sell(3, "2024-01-10", "AAPL", dec!(5), dec!(150), dec!(0)),
    ];
    let assets = default_assets();
    let settings = ValuationSettings::default();

    let a = process_ledger(&early_sell, &assets, &settings).unwrap();
    let b = process_ledger(&late_sell, &assets, &settings).unwrap();

    assert_eq!(a.realized_sales[0].cost_basis.to_string(), "500.00");
    assert_eq!(b.realized_sales[0].cost_basis.to_string(), "500.00");
    assert_eq!(a.lot_books["AAPL"].total_cost(), dec!(1000));
    assert_eq!(b.lot_books["AAPL"].total_cost(), dec!(1000));

    // Same entries, different order across the sale boundary: the sale
    // matches a different lot.
    let swapped = vec![
        buy(1, "2024-01-01", "AAPL", dec!(5), dec!(200), dec!(0)),
        sell(2, "2024-01-05", "AAPL", dec!(5), dec!(150), dec!(0)),
        buy(3, "2024-01-10", "AAPL", dec!(5), dec!(100), dec!(0)),
    ];
    let c = process_ledger(&swapped, &assets, &settings).unwrap();
    assert_eq!(c.realized_sales[0].cost_basis.to_string(), "1000.00");
}

#[test]
fn negative_quantity_is_rejected() {
    let mut tx = buy(1, "2024-01-01", "AAPL", dec!(10), dec!(100), dec!(0));
    tx.quantity = dec!(-1);
    let err =
        process_ledger(&[tx], &default_assets(), &ValuationSettings::default()).unwrap_err();
    assert!(matches!(err, crate::errors::Error::Calculation(_)));
}

#[test]
fn lot_conservation_holds_at_every_prefix() {
    let txs = vec![
        buy(1, "2024-01-01", "AAPL", dec!(10), dec!(100), dec!(0)),
        gift(2, "2024-01-15", "AAPL", dec!(4), dec!(50)),
        sell(3, "2024-02-01", "AAPL", dec!(6), dec!(120), dec!(0)),
        sell(4, "2024-03-01", "AAPL", dec!(20), dec!(120), dec!(0)),
    ];
    let assets = default_assets();
    let settings = ValuationSettings::default();

    let mut acquired = Decimal::ZERO;
    let mut sold = Decimal::ZERO;
    for end in 1..=txs.len() {
        let outcome = process_ledger(&txs[..end], &assets, &settings).unwrap();
        match txs[end - 1].tx_type {
            crate::ledger::TransactionType::Sell => sold += txs[end - 1].quantity,
            _ => acquired += txs[end - 1].quantity,
        }
        let expected = (acquired - sold).max(Decimal::ZERO);
        assert_eq!(outcome.lot_books["AAPL"].total_quantity(), expected);
    }
}
