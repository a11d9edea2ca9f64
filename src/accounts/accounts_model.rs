use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::decimal_serde;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Operativa,
    Ahorro,
    Inversion,
    Depositos,
    Alternativos,
}

/// A cash account. The balance is maintained by hand (or import) and feeds
/// the cash side of the portfolio view.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_type: AccountType,
    pub currency: String,
    #[serde(with = "decimal_serde")]
    pub balance: Decimal,
}
