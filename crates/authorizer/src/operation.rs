use crate::error::RecordError;
use crate::violation::Violation;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cardholder account state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Account {
    pub active_card: bool,
    pub available_limit: i64,
}

impl Account {
    pub const fn new(active_card: bool, available_limit: i64) -> Self {
        Self {
            active_card,
            available_limit,
        }
    }
}

/// Attempted debit against the account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transaction {
    pub merchant: String,
    pub amount: i64,
    pub time: DateTime<FixedOffset>,
}

/// Input record, one per line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Account(Account),
    Transaction(Transaction),
}

impl FromStr for Operation {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let operation: Self = serde_json::from_str(line)?;

        if let Self::Transaction(tx) = &operation {
            if tx.amount < 0 {
                return Err(RecordError::NegativeAmount { amount: tx.amount });
            }
        }

        Ok(operation)
    }
}

/// Outcome of a single operation: resulting account plus the rules it broke
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub account: Account,
    pub violations: Vec<Violation>,
}

impl Decision {
    pub const fn approved(account: Account) -> Self {
        Self {
            account,
            violations: Vec::new(),
        }
    }

    pub const fn rejected(account: Account, violations: Vec<Violation>) -> Self {
        Self {
            account,
            violations,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account() {
        let op: Operation = r#"{"account": {"active-card": true, "available-limit": 100}}"#
            .parse()
            .unwrap();

        assert_eq!(op, Operation::Account(Account::new(true, 100)));
    }

    #[test]
    fn test_parse_transaction_keeps_offset_instant() {
        let op: Operation = r#"{"transaction": {"merchant": "Burger King", "amount": 20, "time": "2019-02-13T10:00:00.000-03:00"}}"#
            .parse()
            .unwrap();

        let Operation::Transaction(tx) = op else {
            panic!("expected a transaction, got {op:?}");
        };
        assert_eq!(tx.merchant, "Burger King");
        assert_eq!(tx.amount, 20);

        let utc: DateTime<FixedOffset> = "2019-02-13T13:00:00Z".parse().unwrap();
        assert_eq!(tx.time, utc);
    }

    #[test]
    fn test_reject_negative_amount() {
        let result = r#"{"transaction": {"merchant": "X", "amount": -5, "time": "2019-02-13T10:00:00.000Z"}}"#
            .parse::<Operation>();

        assert!(matches!(
            result,
            Err(RecordError::NegativeAmount { amount: -5 })
        ));
    }

    #[test]
    fn test_reject_malformed_records() {
        let lines = [
            "not json",
            r#"{"deposit": {"amount": 10}}"#,
            r#"{"transaction": {"merchant": "X", "amount": 10, "time": "yesterday"}}"#,
            r#"{"account": {"active-card": "yes", "available-limit": 100}}"#,
            r#"{"account": {"active-card": true, "available-limit": 100}, "transaction": {"merchant": "X", "amount": 10, "time": "2019-02-13T10:00:00.000Z"}}"#,
            "{}",
        ];

        for line in lines {
            assert!(
                matches!(line.parse::<Operation>(), Err(RecordError::Json(_))),
                "line should be rejected: {line}"
            );
        }
    }

    #[test]
    fn test_serialize_decision() {
        let approved = Decision::approved(Account::new(true, 100));
        assert_eq!(
            serde_json::to_string(&approved).unwrap(),
            r#"{"account":{"active-card":true,"available-limit":100},"violations":[]}"#
        );

        let rejected = Decision::rejected(
            Account::new(true, 100),
            vec![Violation::InsufficientLimit, Violation::HighFrequencySmallInterval],
        );
        assert_eq!(
            serde_json::to_string(&rejected).unwrap(),
            r#"{"account":{"active-card":true,"available-limit":100},"violations":["insufficient-limit","high-frequency-small-interval"]}"#
        );
    }
}
