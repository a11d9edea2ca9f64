pub(crate) mod assets_model;
pub(crate) mod assets_traits;

pub use assets_model::{Asset, AssetType};
pub use assets_traits::AssetReaderTrait;
