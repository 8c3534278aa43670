use crate::history::History;
use crate::operation::{Account, Decision, Operation, Transaction};
use crate::violation::Violation;
use chrono::Duration;

/// Window, in minutes, for the doubled and high-frequency checks
const PATTERN_WINDOW_MINUTES: i64 = 2;

/// History must exceed this many records before the high-frequency check applies
const HIGH_FREQUENCY_MIN_HISTORY: usize = 3;

/// Recent transactions that make the next one high-frequency
const HIGH_FREQUENCY_MAX_RECENT: usize = 3;

/// Initial limit of a starter account
const STARTER_LIMIT: i64 = 100;

/// Account as the authorizer currently believes it to be
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorizerState {
    account: Option<Account>,
}

impl AuthorizerState {
    pub const fn new() -> Self {
        Self { account: None }
    }

    pub const fn with_account(account: Account) -> Self {
        Self {
            account: Some(account),
        }
    }

    pub const fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }
}

/// Accept the incoming account unless one already exists
pub fn initialize(incoming: Account, state: &AuthorizerState) -> Decision {
    match state.account {
        Some(existing) => Decision::rejected(existing, vec![Violation::AccountAlreadyInitialized]),
        None => Decision::approved(incoming),
    }
}

/// Run every transaction rule and collect violations in check order
pub fn authorize(tx: &Transaction, state: &AuthorizerState, history: &History) -> Decision {
    let Some(account) = state.account else {
        return Decision::rejected(Account::default(), vec![Violation::AccountNotInitialized]);
    };

    let remaining = account.available_limit.saturating_sub(tx.amount);
    let mut violations = Vec::new();

    if remaining < 0 {
        violations.push(Violation::InsufficientLimit);
    }

    if !account.active_card {
        violations.push(Violation::CardNotActive);
    }

    if is_doubled(tx, history) {
        violations.push(Violation::DoubledTransaction);
    }

    if is_high_frequency(tx, history) {
        violations.push(Violation::HighFrequencySmallInterval);
    }

    if violations.is_empty() {
        Decision::approved(Account {
            available_limit: remaining,
            ..account
        })
    } else {
        Decision::rejected(account, violations)
    }
}

/// Signed: a prior transaction stamped after `tx` is inside the window too
fn within_window(tx: &Transaction, prior: &Transaction) -> bool {
    tx.time.signed_duration_since(prior.time) < Duration::minutes(PATTERN_WINDOW_MINUTES)
}

fn is_doubled(tx: &Transaction, history: &History) -> bool {
    history.transactions_newest_first().any(|prior| {
        prior.merchant == tx.merchant && prior.amount == tx.amount && within_window(tx, prior)
    })
}

fn is_high_frequency(tx: &Transaction, history: &History) -> bool {
    if history.len() <= HIGH_FREQUENCY_MIN_HISTORY {
        return false;
    }

    // Gated on the account as first created, not as it stands now
    let is_starter = history
        .initial_account()
        .is_some_and(|initial| initial.active_card && initial.available_limit == STARTER_LIMIT);

    if !is_starter {
        return false;
    }

    history
        .transactions_newest_first()
        .filter(|prior| within_window(tx, prior))
        .take(HIGH_FREQUENCY_MAX_RECENT)
        .count()
        == HIGH_FREQUENCY_MAX_RECENT
}

/// Feeds operations through the rules in arrival order, threading state and history
#[derive(Debug, Default)]
pub struct Authorizer {
    state: AuthorizerState,
    history: History,
}

impl Authorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, operation: Operation) -> Decision {
        let decision = match &operation {
            Operation::Account(incoming) => initialize(*incoming, &self.state),
            Operation::Transaction(tx) => authorize(tx, &self.state, &self.history),
        };

        if decision.is_approved() {
            self.state.account = Some(decision.account);
        }

        self.history.push(operation);

        decision
    }

    pub const fn state(&self) -> &AuthorizerState {
        &self.state
    }

    pub const fn history(&self) -> &History {
        &self.history
    }
}
