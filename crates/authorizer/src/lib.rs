pub mod engine;
pub mod error;
pub mod history;
pub mod operation;
pub mod violation;

use engine::Authorizer;
use operation::{Decision, Operation};

/// Process a batch of operations and return one decision per operation, in order
pub fn process_batch(operations: impl IntoIterator<Item = Operation>) -> Vec<Decision> {
    let mut authorizer = Authorizer::new();

    operations
        .into_iter()
        .map(|op| authorizer.process(op))
        .collect()
}
