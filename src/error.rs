use thiserror::Error;

#[derive(Error, Debug)]
pub enum PennyError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid transaction kind: {0} (expected 'income' or 'outcome')")]
    InvalidKind(String),

    #[error("Insufficient funds: outcome of {requested:.2} exceeds balance of {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("Invalid value: {0} (expected a non-negative number)")]
    InvalidValue(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("No transaction with id {0}")]
    UnknownTransaction(i64),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, PennyError>;
