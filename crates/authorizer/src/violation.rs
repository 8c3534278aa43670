use serde::Serialize;
use std::fmt;

/// Business rule an operation failed to satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Violation {
    AccountAlreadyInitialized,
    AccountNotInitialized,
    InsufficientLimit,
    CardNotActive,
    DoubledTransaction,
    HighFrequencySmallInterval,
}

impl Violation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccountAlreadyInitialized => "account-already-initialized",
            Self::AccountNotInitialized => "account-not-initialized",
            Self::InsufficientLimit => "insufficient-limit",
            Self::CardNotActive => "card-not-active",
            Self::DoubledTransaction => "doubled-transaction",
            Self::HighFrequencySmallInterval => "high-frequency-small-interval",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
