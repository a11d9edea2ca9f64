use super::ledger_model::{DividendYearTotal, InterestYearTotal, Transaction};
use crate::errors::Result;

/// Contract for the transaction store. Implementations must deliver the full
/// ledger ordered by `(date, seq)` ascending; the engine depends on that
/// order and does not re-sort.
pub trait LedgerReaderTrait: Send + Sync {
    fn transactions_ordered(&self) -> Result<Vec<Transaction>>;
}

/// Contract for the dividend/interest store: pre-aggregated yearly sums used
/// by the yearly summary.
pub trait IncomeReaderTrait: Send + Sync {
    fn dividends_by_year(&self) -> Result<Vec<DividendYearTotal>>;
    fn interests_by_year(&self) -> Result<Vec<InterestYearTotal>>;
}
