use super::assets_model::Asset;
use crate::errors::Result;

/// Trait defining the contract for asset reference-data reads.
pub trait AssetReaderTrait: Send + Sync {
    fn assets(&self) -> Result<Vec<Asset>>;
}
