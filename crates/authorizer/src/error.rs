use thiserror::Error;

/// Reasons an input line could not be turned into an operation record
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Malformed operation record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Transaction amount must not be negative, got {amount}")]
    NegativeAmount { amount: i64 },
}
