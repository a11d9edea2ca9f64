pub(crate) mod snapshots_model;
pub(crate) mod snapshots_traits;

pub use snapshots_model::{AccountSnapshot, PortfolioSnapshot, PositionSnapshot};
pub use snapshots_traits::SnapshotReaderTrait;
