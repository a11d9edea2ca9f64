use thiserror::Error;

// --- Define Result Type ---
pub type Result<T> = std::result::Result<T, CalculatorError>;

// --- Custom Error Type ---
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid transaction data: {0}")]
    InvalidTransaction(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),

    #[error("Internal error: {0}")]
    Internal(String), // For unexpected logic failures
}
