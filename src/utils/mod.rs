pub mod decimal_serde;
pub mod rounding;
