use crate::operation::{Account, Operation, Transaction};

/// Append-only log of every operation seen during a run, accepted or not
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<Operation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, operation: Operation) {
        self.records.push(operation);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First account-creation record ever seen, regardless of later changes
    pub fn initial_account(&self) -> Option<&Account> {
        self.records.iter().find_map(|op| match op {
            Operation::Account(account) => Some(account),
            Operation::Transaction(_) => None,
        })
    }

    /// Prior transactions, most recent first
    pub fn transactions_newest_first(&self) -> impl Iterator<Item = &Transaction> {
        self.records.iter().rev().filter_map(|op| match op {
            Operation::Transaction(tx) => Some(tx),
            Operation::Account(_) => None,
        })
    }
}

impl FromIterator<Operation> for History {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
