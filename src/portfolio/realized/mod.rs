mod realized_model;
mod realized_service;

pub use realized_model::{RealizedPnlReport, YearSummary};
pub use realized_service::{realized_pnl_report, year_summary};
