use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Failed to read transactions: {0}")]
    ReadFailed(String),

    #[error("Transactions are not in (date, seq) order: {0}")]
    OutOfOrder(String),
}
