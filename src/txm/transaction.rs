use crate::ids::TransactionId;
use crate::Money;

use chrono::{DateTime, Utc};

/// Transaction is an immutable record of an amount at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: Money,
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction with a fresh id, dated now
    pub fn new(amount: Money) -> Self {
        Self::with_date(amount, Utc::now())
    }

    pub fn with_date(amount: Money, date: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::generate(),
            amount,
            date,
        }
    }

    /// Date as shown in listings, `DD/MM/YYYY`
    pub fn display_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}
