use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::ledger::{DividendYearTotal, InterestYearTotal};
use crate::portfolio::lots::RealizedSale;
use crate::settings::ValuationSettings;
use crate::utils::rounding::quantize;

use super::realized_model::{RealizedPnlReport, YearSummary};

/// Sums all realized-sale P&L into one grand total.
pub fn realized_pnl_report(
    realized_sales: Vec<RealizedSale>,
    settings: &ValuationSettings,
) -> RealizedPnlReport {
    let total: Decimal = realized_sales.iter().map(|s| s.realized_pnl).sum();
    RealizedPnlReport {
        realized_pnl_total: quantize(total, settings.rounding_money),
        realized_sales,
    }
}

/// Merges dividend and interest yearly sums with the sales P&L grouped by
/// calendar year of sale. `total_net = dividends_net + interests_net +
/// sales_pnl`. Years come out ascending.
pub fn year_summary(
    realized_sales: &[RealizedSale],
    dividends: &[DividendYearTotal],
    interests: &[InterestYearTotal],
) -> Vec<YearSummary> {
    let mut years: BTreeMap<i32, YearSummary> = BTreeMap::new();

    for d in dividends {
        let entry = years
            .entry(d.year)
            .or_insert_with(|| YearSummary::empty(d.year));
        entry.dividends_gross = d.gross;
        entry.dividends_tax = d.tax;
        entry.dividends_net = d.net;
    }

    for i in interests {
        let entry = years
            .entry(i.year)
            .or_insert_with(|| YearSummary::empty(i.year));
        entry.interests_gross = i.gross;
        entry.interests_net = i.net;
    }

    for sale in realized_sales {
        let year = sale.date.year();
        let entry = years.entry(year).or_insert_with(|| YearSummary::empty(year));
        entry.sales_pnl += sale.realized_pnl;
    }

    years
        .into_values()
        .map(|mut summary| {
            summary.total_net = summary.dividends_net + summary.interests_net + summary.sales_pnl;
            summary
        })
        .collect()
}
