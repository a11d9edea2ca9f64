mod lot_engine;
mod lot_model;

pub use lot_engine::process_ledger;
pub use lot_model::{FifoOutcome, LotBook, OpenLot, RealizedSale};
