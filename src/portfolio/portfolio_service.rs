use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::AccountReaderTrait;
use crate::assets::{Asset, AssetReaderTrait};
use crate::errors::Result;
use crate::ledger::{IncomeReaderTrait, LedgerError, LedgerReaderTrait, Transaction};
use crate::settings::ValuationSettings;
use crate::snapshots::SnapshotReaderTrait;
use crate::utils::decimal_serde::decimal_serde;

use super::holdings::{build_portfolio, PortfolioView};
use super::lots::{process_ledger, RealizedSale};
use super::patrimony::{patrimony_evolution, value_evolution, PatrimonyInputs, PatrimonyPoint, ValuePoint};
use super::realized::{realized_pnl_report, year_summary, RealizedPnlReport, YearSummary};

/// Positions view and realized section produced by one FIFO pass.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FullPortfolioView {
    #[serde(flatten)]
    pub portfolio: PortfolioView,
    #[serde(with = "decimal_serde")]
    pub realized_pnl_total: Decimal,
    pub realized_sales: Vec<RealizedSale>,
}

/// Facade over the external stores. Each call performs one full read of the
/// collaborators it needs and runs the engine to completion; no state is
/// kept between calls.
pub struct PortfolioService {
    ledger_reader: Arc<dyn LedgerReaderTrait>,
    snapshot_reader: Arc<dyn SnapshotReaderTrait>,
    income_reader: Arc<dyn IncomeReaderTrait>,
    asset_reader: Arc<dyn AssetReaderTrait>,
    account_reader: Arc<dyn AccountReaderTrait>,
}

impl PortfolioService {
    pub fn new(
        ledger_reader: Arc<dyn LedgerReaderTrait>,
        snapshot_reader: Arc<dyn SnapshotReaderTrait>,
        income_reader: Arc<dyn IncomeReaderTrait>,
        asset_reader: Arc<dyn AssetReaderTrait>,
        account_reader: Arc<dyn AccountReaderTrait>,
    ) -> Self {
        Self {
            ledger_reader,
            snapshot_reader,
            income_reader,
            asset_reader,
            account_reader,
        }
    }

    /// Current positions view.
    pub fn portfolio(&self, settings: &ValuationSettings) -> Result<PortfolioView> {
        let transactions = self.ordered_transactions()?;
        let assets = self.asset_map()?;
        let accounts = self.account_reader.accounts()?;

        let outcome = process_ledger(&transactions, &assets, settings)?;
        Ok(build_portfolio(
            &outcome.lot_books,
            &assets,
            &accounts,
            settings,
        ))
    }

    /// Positions view plus the realized section, from a single FIFO pass.
    pub fn portfolio_full(&self, settings: &ValuationSettings) -> Result<FullPortfolioView> {
        let transactions = self.ordered_transactions()?;
        let assets = self.asset_map()?;
        let accounts = self.account_reader.accounts()?;

        let outcome = process_ledger(&transactions, &assets, settings)?;
        let portfolio = build_portfolio(&outcome.lot_books, &assets, &accounts, settings);
        let realized = realized_pnl_report(outcome.realized_sales, settings);

        Ok(FullPortfolioView {
            portfolio,
            realized_pnl_total: realized.realized_pnl_total,
            realized_sales: realized.realized_sales,
        })
    }

    /// Realized P&L report over the whole ledger.
    pub fn realized_pnl(&self, settings: &ValuationSettings) -> Result<RealizedPnlReport> {
        let transactions = self.ordered_transactions()?;
        let assets = self.asset_map()?;

        let outcome = process_ledger(&transactions, &assets, settings)?;
        Ok(realized_pnl_report(outcome.realized_sales, settings))
    }

    /// Yearly income summary: dividends, interests and sales P&L per year.
    pub fn year_summary(&self, settings: &ValuationSettings) -> Result<Vec<YearSummary>> {
        let transactions = self.ordered_transactions()?;
        let assets = self.asset_map()?;
        let dividends = self.income_reader.dividends_by_year()?;
        let interests = self.income_reader.interests_by_year()?;

        let outcome = process_ledger(&transactions, &assets, settings)?;
        Ok(year_summary(&outcome.realized_sales, &dividends, &interests))
    }

    /// Portfolio snapshot value series, positive values only.
    pub fn value_evolution(&self) -> Result<Vec<ValuePoint>> {
        let snapshots = self.snapshot_reader.portfolio_snapshots()?;
        Ok(value_evolution(&snapshots))
    }

    /// Monthly patrimony series. `today` anchors the live current-month
    /// override; pass the current date.
    pub fn patrimony_evolution(
        &self,
        today: NaiveDate,
        settings: &ValuationSettings,
    ) -> Result<Vec<PatrimonyPoint>> {
        let transactions = self.ordered_transactions()?;
        let assets = self.asset_map()?;
        let accounts = self.account_reader.accounts()?;
        let portfolio_snapshots = self.snapshot_reader.portfolio_snapshots()?;
        let position_snapshots = self.snapshot_reader.position_snapshots()?;
        let account_snapshots = self.snapshot_reader.account_snapshots()?;

        let outcome = process_ledger(&transactions, &assets, settings)?;
        let live = build_portfolio(&outcome.lot_books, &assets, &accounts, settings);
        debug!(
            "Live portfolio for patrimony: {} positions, total {}",
            live.positions.len(),
            live.total_market_value
        );

        let inputs = PatrimonyInputs {
            transactions: &transactions,
            assets: &assets,
            portfolio_snapshots: &portfolio_snapshots,
            position_snapshots: &position_snapshots,
            account_snapshots: &account_snapshots,
            live: &live,
        };
        Ok(patrimony_evolution(&inputs, today, settings))
    }

    fn asset_map(&self) -> Result<HashMap<String, Asset>> {
        let assets = self.asset_reader.assets()?;
        Ok(assets
            .into_iter()
            .map(|asset| (asset.id.clone(), asset))
            .collect())
    }

    /// Reads the ledger and enforces the `(date, seq)` ordering contract.
    fn ordered_transactions(&self) -> Result<Vec<Transaction>> {
        let transactions = self.ledger_reader.transactions_ordered()?;
        for pair in transactions.windows(2) {
            if pair[0].ordering_key() > pair[1].ordering_key() {
                return Err(LedgerError::OutOfOrder(format!(
                    "transaction {} precedes {}",
                    pair[1].id, pair[0].id
                ))
                .into());
            }
        }
        Ok(transactions)
    }
}
