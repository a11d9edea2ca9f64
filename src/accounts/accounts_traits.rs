use super::accounts_model::Account;
use crate::errors::Result;

/// Trait defining the contract for account reads. Accounts come back in name
/// order, the order the cash list is presented in.
pub trait AccountReaderTrait: Send + Sync {
    fn accounts(&self) -> Result<Vec<Account>>;
}
