use super::snapshots_model::{AccountSnapshot, PortfolioSnapshot, PositionSnapshot};
use crate::errors::Result;

/// Contract for the snapshot store. Portfolio and account snapshots must be
/// delivered in ascending date order; the reconciler's "last value wins"
/// bucketing depends on it.
pub trait SnapshotReaderTrait: Send + Sync {
    fn portfolio_snapshots(&self) -> Result<Vec<PortfolioSnapshot>>;
    fn position_snapshots(&self) -> Result<Vec<PositionSnapshot>>;
    fn account_snapshots(&self) -> Result<Vec<AccountSnapshot>>;
}
