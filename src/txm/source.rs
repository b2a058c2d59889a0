use crate::Result;
use crate::{Money, Transaction};

use async_trait::async_trait;

use chrono::{Duration, Utc};

/// Loads the initial transaction list. Resolves once, with no retry or cancellation.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Transaction>>;
}

/// Source backed by a fixed in-memory list
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    transactions: Vec<Transaction>,
}

impl StaticSource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Built-in demo data, dated relative to now
    pub fn mocked() -> Self {
        let now = Utc::now();

        let transactions = [(1000, 100), (500, 150), (500, 80), (1200, 20), (1100, 300)]
            .into_iter()
            .map(|(amount, days)| {
                Transaction::with_date(Money::from_units(amount), now + Duration::days(days))
            })
            .collect();

        Self::new(transactions)
    }
}

#[async_trait]
impl TransactionSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Transaction>> {
        log::debug!("Fetching {} static transactions", self.transactions.len());
        Ok(self.transactions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::matcher::{find_pair, MatchResult};

    #[tokio::test]
    async fn mocked_fetch() {
        let source = StaticSource::mocked();

        let transactions = source.fetch().await.unwrap();

        let amounts: Vec<Money> = transactions.iter().map(|tx| tx.amount).collect();
        assert_eq!(
            amounts,
            [1000, 500, 500, 1200, 1100].map(Money::from_units).to_vec()
        );
        assert!(transactions.iter().all(|tx| tx.date > Utc::now()));
        assert_eq!(
            find_pair(&transactions, Money::from_units(1500)),
            MatchResult::Found(0, 1)
        );
    }

    #[tokio::test]
    async fn fetch_is_deterministic() {
        let source = StaticSource::mocked();

        assert_eq!(source.fetch().await.unwrap(), source.fetch().await.unwrap());
    }

    #[tokio::test]
    async fn dyn_source() {
        let source: Box<dyn TransactionSource> = Box::new(StaticSource::default());

        assert!(source.fetch().await.unwrap().is_empty());
    }
}
