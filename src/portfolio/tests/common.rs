// Shared fixtures for the portfolio engine tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::accounts::{Account, AccountReaderTrait, AccountType};
use crate::assets::{Asset, AssetReaderTrait, AssetType};
use crate::errors::Result;
use crate::ledger::{
    DividendYearTotal, IncomeReaderTrait, InterestYearTotal, LedgerReaderTrait, Transaction,
    TransactionType,
};
use crate::portfolio::PortfolioService;
use crate::snapshots::{
    AccountSnapshot, PortfolioSnapshot, PositionSnapshot, SnapshotReaderTrait,
};

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn transaction(
    seq: i64,
    date_str: &str,
    tx_type: TransactionType,
    asset_id: &str,
    account_id: &str,
    quantity: Decimal,
    price: Decimal,
    commission: Decimal,
) -> Transaction {
    Transaction {
        id: format!("tx-{}", seq),
        date: date(date_str),
        tx_type,
        asset_id: asset_id.to_string(),
        account_id: account_id.to_string(),
        quantity,
        price: Some(price),
        commission,
        tax: Decimal::ZERO,
        seq,
    }
}

pub(crate) fn buy(
    seq: i64,
    date_str: &str,
    asset_id: &str,
    quantity: Decimal,
    price: Decimal,
    commission: Decimal,
) -> Transaction {
    transaction(
        seq,
        date_str,
        TransactionType::Buy,
        asset_id,
        "ACC-1",
        quantity,
        price,
        commission,
    )
}

pub(crate) fn sell(
    seq: i64,
    date_str: &str,
    asset_id: &str,
    quantity: Decimal,
    price: Decimal,
    commission: Decimal,
) -> Transaction {
    transaction(
        seq,
        date_str,
        TransactionType::Sell,
        asset_id,
        "ACC-1",
        quantity,
        price,
        commission,
    )
}

pub(crate) fn gift(
    seq: i64,
    date_str: &str,
    asset_id: &str,
    quantity: Decimal,
    price: Decimal,
) -> Transaction {
    transaction(
        seq,
        date_str,
        TransactionType::Gift,
        asset_id,
        "ACC-1",
        quantity,
        price,
        Decimal::ZERO,
    )
}

pub(crate) fn asset(
    id: &str,
    ticker: Option<&str>,
    asset_type: AssetType,
    current_price: Option<Decimal>,
) -> Asset {
    Asset {
        id: id.to_string(),
        name: format!("{} Asset", id),
        ticker: ticker.map(str::to_string),
        asset_type,
        currency: "EUR".to_string(),
        current_price,
    }
}

pub(crate) fn asset_map(assets: Vec<Asset>) -> HashMap<String, Asset> {
    assets.into_iter().map(|a| (a.id.clone(), a)).collect()
}

pub(crate) fn account(id: &str, name: &str, balance: Decimal) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        account_type: AccountType::Operativa,
        currency: "EUR".to_string(),
        balance,
    }
}

pub(crate) fn portfolio_snapshot(
    date_str: &str,
    batch_id: Uuid,
    total_market_value: Decimal,
) -> PortfolioSnapshot {
    PortfolioSnapshot {
        captured_at: date(date_str),
        batch_id,
        total_market_value,
    }
}

pub(crate) fn position_snapshot(
    batch_id: Uuid,
    asset_id: &str,
    market_value: Decimal,
) -> PositionSnapshot {
    PositionSnapshot {
        batch_id,
        asset_id: asset_id.to_string(),
        market_value,
    }
}

pub(crate) fn account_snapshot(account_id: &str, date_str: &str, balance: Decimal) -> AccountSnapshot {
    AccountSnapshot {
        account_id: account_id.to_string(),
        date: date(date_str),
        balance,
    }
}

/// All five reader seams backed by plain vectors.
#[derive(Default)]
pub(crate) struct InMemoryStore {
    pub transactions: Vec<Transaction>,
    pub assets: Vec<Asset>,
    pub accounts: Vec<Account>,
    pub portfolio_snapshots: Vec<PortfolioSnapshot>,
    pub position_snapshots: Vec<PositionSnapshot>,
    pub account_snapshots: Vec<AccountSnapshot>,
    pub dividends: Vec<DividendYearTotal>,
    pub interests: Vec<InterestYearTotal>,
}

impl LedgerReaderTrait for InMemoryStore {
    fn transactions_ordered(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }
}

impl SnapshotReaderTrait for InMemoryStore {
    fn portfolio_snapshots(&self) -> Result<Vec<PortfolioSnapshot>> {
        Ok(self.portfolio_snapshots.clone())
    }

    fn position_snapshots(&self) -> Result<Vec<PositionSnapshot>> {
        Ok(self.position_snapshots.clone())
    }

    fn account_snapshots(&self) -> Result<Vec<AccountSnapshot>> {
        Ok(self.account_snapshots.clone())
    }
}

impl IncomeReaderTrait for InMemoryStore {
    fn dividends_by_year(&self) -> Result<Vec<DividendYearTotal>> {
        Ok(self.dividends.clone())
    }

    fn interests_by_year(&self) -> Result<Vec<InterestYearTotal>> {
        Ok(self.interests.clone())
    }
}

impl AssetReaderTrait for InMemoryStore {
    fn assets(&self) -> Result<Vec<Asset>> {
        Ok(self.assets.clone())
    }
}

impl AccountReaderTrait for InMemoryStore {
    fn accounts(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.clone())
    }
}

pub(crate) fn service(store: InMemoryStore) -> PortfolioService {
    let store = Arc::new(store);
    PortfolioService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
    )
}
