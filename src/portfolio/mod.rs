pub mod holdings;
pub mod lots;
pub mod patrimony;
pub mod portfolio_errors;
pub mod portfolio_service;
pub mod realized;

#[cfg(test)]
pub(crate) mod tests;

pub use holdings::*;
pub use lots::*;
pub use patrimony::*;
pub use portfolio_service::*;
pub use realized::*;
