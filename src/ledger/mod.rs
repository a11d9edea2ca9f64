pub(crate) mod ledger_errors;
pub(crate) mod ledger_model;
pub(crate) mod ledger_traits;

pub use ledger_errors::LedgerError;
pub use ledger_model::{
    Dividend, DividendYearTotal, Interest, InterestYearTotal, Transaction, TransactionType,
};
pub use ledger_traits::{IncomeReaderTrait, LedgerReaderTrait};
