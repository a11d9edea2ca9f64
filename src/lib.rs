pub mod accounts;
pub mod assets;
pub mod constants;
pub mod errors;
pub mod ledger;
pub mod portfolio;
pub mod settings;
pub mod snapshots;
pub mod utils;

pub use ledger::*;
pub use portfolio::*;
