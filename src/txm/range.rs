use crate::Result;
use crate::Transaction;

use chrono::{DateTime, Utc};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RangeError {
    #[error("End date could not be earlier than start date: {1} is before {0}")]
    EndBeforeStart(DateTime<Utc>, DateTime<Utc>),
}

/// Exclusive date bounds, guaranteed `from <= to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl DateRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self> {
        if to < from {
            Err(RangeError::EndBeforeStart(from, to))?
        }

        return Ok(Self { from, to });
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// Strictly after `from` and strictly before `to`
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        *date > self.from && *date < self.to
    }
}

/// Returns the transactions dated inside `range`, in their original order
pub fn filter_by_range(transactions: &[Transaction], range: &DateRange) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| range.contains(&tx.date))
        .copied()
        .collect()
}
