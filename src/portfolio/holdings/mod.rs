mod holdings_calculator;
mod holdings_model;

pub use holdings_calculator::build_portfolio;
pub use holdings_model::{CashAccountView, PortfolioView, PositionView};
