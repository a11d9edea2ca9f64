mod patrimony_model;
mod patrimony_service;

pub use patrimony_model::{PatrimonyInputs, PatrimonyPoint, SeriesMode, ValuePoint};
pub use patrimony_service::{patrimony_evolution, value_evolution};
