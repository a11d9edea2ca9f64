pub(crate) mod accounts_model;
pub(crate) mod accounts_traits;

pub use accounts_model::{Account, AccountType};
pub use accounts_traits::AccountReaderTrait;
