use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::constants::MONTH_KEY_FORMAT;
use crate::ledger::TransactionType;
use crate::settings::ValuationSettings;
use crate::snapshots::PortfolioSnapshot;
use crate::utils::rounding::quantize;

use super::patrimony_model::{PatrimonyInputs, PatrimonyPoint, SeriesMode, ValuePoint};

/// Raw portfolio-value series from the persisted snapshots, positive values
/// only.
pub fn value_evolution(portfolio_snapshots: &[PortfolioSnapshot]) -> Vec<ValuePoint> {
    portfolio_snapshots
        .iter()
        .filter(|snap| snap.total_market_value > Decimal::ZERO)
        .map(|snap| ValuePoint {
            captured_at: snap.captured_at,
            value: snap.total_market_value,
        })
        .collect()
}

/// Source semantics per series; see `SeriesMode`.
const CASH_MODE: SeriesMode = SeriesMode::CarryForward;
const SNAPSHOT_MODE: SeriesMode = SeriesMode::PointInTime;
const CURRENT_MONTH_MODE: SeriesMode = SeriesMode::LiveOverride;

/// Blends account snapshots (cash), portfolio/position snapshots
/// (investments) and the live positions view into a monthly patrimony
/// series.
///
/// The emitted month set is the union of every month holding cash, snapshot
/// or transaction data, plus the current month whenever any portfolio data
/// exists. Cash carries forward; investments are point-in-time per snapshot
/// month; months before the first snapshot fall back to the ledger's running
/// net deployed capital; the current month is always recomputed live.
pub fn patrimony_evolution(
    inputs: &PatrimonyInputs,
    today: NaiveDate,
    settings: &ValuationSettings,
) -> Vec<PatrimonyPoint> {
    let money_scale = settings.rounding_money;

    // Cash: latest balance per account, summed, keyed by the snapshot's own
    // month. Sparse input; carry-forward happens in the emit loop.
    let mut latest_balance: HashMap<&str, Decimal> = HashMap::new();
    let mut monthly_cash: BTreeMap<String, Decimal> = BTreeMap::new();
    for snap in inputs.account_snapshots {
        latest_balance.insert(snap.account_id.as_str(), snap.balance);
        let total: Decimal = latest_balance.values().copied().sum();
        monthly_cash.insert(month_key(snap.date), total);
    }

    // Investments: last portfolio snapshot captured within each month.
    let mut monthly_snapshot: BTreeMap<String, &PortfolioSnapshot> = BTreeMap::new();
    for snap in inputs.portfolio_snapshots {
        monthly_snapshot.insert(month_key(snap.captured_at), snap);
    }

    let (batch_rv, batch_rf) = split_batches(inputs, monthly_snapshot.values().copied());

    // Ledger fallback: cumulative net capital deployed per bucket at each
    // transaction month. Approximation only; realized gains are ignored.
    let mut deployed_series: Vec<(String, Decimal, Decimal)> = Vec::new();
    {
        let mut rv_running = Decimal::ZERO;
        let mut rf_running = Decimal::ZERO;
        for tx in inputs.transactions {
            let price = tx.price.unwrap_or(Decimal::ZERO);
            let delta = match tx.tx_type {
                TransactionType::Buy | TransactionType::Gift => {
                    tx.quantity * price + tx.commission
                }
                TransactionType::Sell => -(tx.quantity * price - tx.commission),
            };
            let equity_like = inputs
                .assets
                .get(&tx.asset_id)
                .map(|asset| asset.asset_type.is_equity_like())
                .unwrap_or(false);
            if equity_like {
                rv_running += delta;
            } else {
                rf_running += delta;
            }

            let key = month_key(tx.date);
            match deployed_series.last_mut() {
                Some(last) if last.0 == key => {
                    last.1 = rv_running;
                    last.2 = rf_running;
                }
                _ => deployed_series.push((key, rv_running, rf_running)),
            }
        }
    }

    let mut months: BTreeSet<String> = BTreeSet::new();
    months.extend(monthly_cash.keys().cloned());
    months.extend(monthly_snapshot.keys().cloned());
    months.extend(deployed_series.iter().map(|(key, _, _)| key.clone()));

    let has_portfolio_data = !monthly_snapshot.is_empty() || !inputs.transactions.is_empty();
    let current_month = month_key(today);
    if has_portfolio_data {
        months.insert(current_month.clone());
    }
    if months.is_empty() {
        return Vec::new();
    }

    let first_snapshot_month = monthly_snapshot.keys().next().cloned();

    debug!(
        "Patrimony blend: {} months, modes cash={:?} snapshots={:?} current={:?}",
        months.len(),
        CASH_MODE,
        SNAPSHOT_MODE,
        CURRENT_MONTH_MODE
    );

    let mut result = Vec::with_capacity(months.len());
    let mut last_cash = Decimal::ZERO;
    let mut deployed_idx = 0;
    let mut last_deployed = (Decimal::ZERO, Decimal::ZERO);

    for month in months {
        // Advance the cumulative deployed pointer up to this month's end.
        while deployed_idx < deployed_series.len() && deployed_series[deployed_idx].0 <= month {
            last_deployed = (
                deployed_series[deployed_idx].1,
                deployed_series[deployed_idx].2,
            );
            deployed_idx += 1;
        }
        if let Some(cash) = monthly_cash.get(&month) {
            last_cash = *cash;
        }

        let (investments, rv, rf) = if month == current_month && has_portfolio_data {
            // The most recent figure is never stale: recompute from the live
            // view even when a snapshot exists for this month.
            live_split(inputs)
        } else if let Some(snap) = monthly_snapshot.get(&month) {
            (
                snap.total_market_value,
                batch_rv.get(&snap.batch_id).copied().unwrap_or_default(),
                batch_rf.get(&snap.batch_id).copied().unwrap_or_default(),
            )
        } else if before(&month, first_snapshot_month.as_deref()) {
            let rv = last_deployed.0.max(Decimal::ZERO);
            let rf = last_deployed.1.max(Decimal::ZERO);
            (rv + rf, rv, rf)
        } else {
            // A month inside the snapshot era without a snapshot of its own
            // is distinct from a month with an old one.
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
        };

        result.push(PatrimonyPoint {
            month,
            cash: quantize(last_cash, money_scale),
            investments: quantize(investments, money_scale),
            renta_variable: quantize(rv, money_scale),
            renta_fija: quantize(rf, money_scale),
        });
    }

    result
}

fn month_key(date: NaiveDate) -> String {
    date.format(MONTH_KEY_FORMAT).to_string()
}

/// True before the first snapshot month; true everywhere when no snapshot
/// exists at all. "YYYY-MM" keys order lexicographically.
fn before(month: &str, first_snapshot_month: Option<&str>) -> bool {
    first_snapshot_month.map_or(true, |first| month < first)
}

/// Splits each selected snapshot batch into equity-like / other market
/// value, classified by the asset's static type. Unknown assets land in the
/// non-equity bucket.
fn split_batches<'a>(
    inputs: &PatrimonyInputs,
    selected: impl Iterator<Item = &'a PortfolioSnapshot>,
) -> (HashMap<Uuid, Decimal>, HashMap<Uuid, Decimal>) {
    let batch_ids: BTreeSet<Uuid> = selected.map(|snap| snap.batch_id).collect();
    let mut batch_rv: HashMap<Uuid, Decimal> = HashMap::new();
    let mut batch_rf: HashMap<Uuid, Decimal> = HashMap::new();

    for pos in inputs.position_snapshots {
        if !batch_ids.contains(&pos.batch_id) {
            continue;
        }
        let equity_like = inputs
            .assets
            .get(&pos.asset_id)
            .map(|asset| asset.asset_type.is_equity_like())
            .unwrap_or(false);
        let bucket = if equity_like {
            &mut batch_rv
        } else {
            &mut batch_rf
        };
        *bucket.entry(pos.batch_id).or_default() += pos.market_value;
    }

    (batch_rv, batch_rf)
}

/// Live investments split for the current month, straight from the positions
/// view the Position Builder produced.
fn live_split(inputs: &PatrimonyInputs) -> (Decimal, Decimal, Decimal) {
    let mut rv = Decimal::ZERO;
    let mut rf = Decimal::ZERO;
    for position in &inputs.live.positions {
        if position.asset_type.is_equity_like() {
            rv += position.market_value;
        } else {
            rf += position.market_value;
        }
    }
    (inputs.live.total_market_value, rv, rf)
}
