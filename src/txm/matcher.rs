use crate::{Money, Transaction};

use std::collections::HashMap;

/// Outcome of a pair-sum search over a list of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    NotFound,

    /// Positions `(i, j)` with `i < j` whose amounts sum to the target
    Found(usize, usize),
}

/// Finds the first pair of transactions whose amounts sum to `target`.
///
/// Scans once, left to right, remembering the latest index seen for each amount. The
/// first transaction whose complement has already been seen ends the scan, so a
/// transaction is never paired with itself.
pub fn find_pair(transactions: &[Transaction], target: Money) -> MatchResult {
    let mut seen: HashMap<Money, usize> = HashMap::with_capacity(transactions.len());

    for (idx, tx) in transactions.iter().enumerate() {
        if let Some(complement) = target.checked_sub(tx.amount) {
            if let Some(&seen_idx) = seen.get(&complement) {
                log::debug!("Found complement {complement} at {seen_idx} for index {idx}");
                return MatchResult::Found(seen_idx, idx);
            }
        }

        seen.insert(tx.amount, idx);
    }

    MatchResult::NotFound
}
