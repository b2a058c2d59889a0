use crate::ids::TransactionId;
use crate::matcher::{self, MatchResult};
use crate::range::{self, DateRange};
use crate::Result;
use crate::{Money, Transaction};

use std::collections::HashSet;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Duplicate transaction id: {0}")]
    DuplicateId(TransactionId),
}

/// Holds every known transaction, newest first, along with the currently displayed view.
///
/// Transactions are never mutated. The view is only ever replaced as a whole, either by a
/// date filter or by clearing it.
#[derive(Debug, Default)]
pub struct Ledger {
    history: Vec<Transaction>,
    visible: Vec<Transaction>,
    ids: HashSet<TransactionId>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from loaded transactions, keeping their order
    pub fn load(transactions: Vec<Transaction>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(transactions.len());

        for tx in transactions.iter() {
            if !ids.insert(tx.id) {
                Err(LedgerError::DuplicateId(tx.id))?
            }
        }

        Ok(Self {
            visible: transactions.clone(),
            history: transactions,
            ids,
        })
    }

    /// Creates a transaction dated now and puts it at the front of the list
    pub fn add(&mut self, amount: Money) -> Result<&Transaction> {
        self.insert(Transaction::new(amount))
    }

    pub fn insert(&mut self, tx: Transaction) -> Result<&Transaction> {
        if !self.ids.insert(tx.id) {
            Err(LedgerError::DuplicateId(tx.id))?
        }

        self.history.insert(0, tx);
        self.visible.insert(0, tx);

        Ok(&self.visible[0])
    }

    /// Replaces the view with every known transaction inside `range`
    pub fn filter(&mut self, range: &DateRange) -> usize {
        log::debug!("Filtering between {} and {}", range.from(), range.to());

        self.visible = range::filter_by_range(&self.history, range);
        self.visible.len()
    }

    pub fn clear_filter(&mut self) -> usize {
        self.visible = self.history.clone();
        self.visible.len()
    }

    pub fn find_match(&self, target: Money) -> MatchResult {
        matcher::find_pair(&self.visible, target)
    }

    pub fn matched_pair(&self, result: &MatchResult) -> Option<(&Transaction, &Transaction)> {
        match *result {
            MatchResult::Found(i, j) => Some((self.visible.get(i)?, self.visible.get(j)?)),
            MatchResult::NotFound => None,
        }
    }

    pub fn visible(&self) -> &[Transaction] {
        &self.visible
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{DateTime, TimeZone, Utc};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    fn build_ledger() -> Ledger {
        Ledger::load(vec![
            Transaction::with_date(Money::from_units(1000), day(10)),
            Transaction::with_date(Money::from_units(500), day(15)),
            Transaction::with_date(Money::from_units(500), day(8)),
            Transaction::with_date(Money::from_units(1200), day(2)),
            Transaction::with_date(Money::from_units(1100), day(30)),
        ])
        .unwrap()
    }

    #[test]
    fn load_rejects_duplicate_ids() {
        let tx = Transaction::with_date(Money::from_units(1), day(1));

        let err = Ledger::load(vec![tx, tx]).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LedgerError>(),
            Some(LedgerError::DuplicateId(id)) if *id == tx.id
        ));
    }

    #[test]
    fn add_prepends() {
        let mut ledger = build_ledger();

        let id = ledger.add(Money::from_units(250)).unwrap().id;

        assert_eq!(ledger.len(), 6);
        assert_eq!(ledger.visible()[0].id, id);
        assert_eq!(ledger.history()[0].id, id);
        assert_eq!(ledger.visible()[0].amount, Money::from_units(250));
    }

    #[test]
    fn add_accepts_zero_amount() {
        let mut ledger = build_ledger();

        let id = ledger.add(Money::parse("0").unwrap()).unwrap().id;

        assert_eq!(ledger.len(), 6);
        assert_eq!(ledger.visible()[0].id, id);
        assert_eq!(ledger.visible()[0].amount, Money::ZERO);
    }

    #[test]
    fn new_is_empty() {
        let mut ledger = Ledger::new();

        assert!(ledger.is_empty());
        assert_eq!(ledger.find_match(Money::ZERO), MatchResult::NotFound);

        ledger.add(Money::from_units(-5)).unwrap();

        assert!(!ledger.is_empty());
        assert_eq!(ledger.history().len(), 1);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut ledger = build_ledger();
        let existing = ledger.visible()[0];

        assert!(ledger.insert(existing).is_err());
        assert_eq!(ledger.len(), 5);
    }

    #[test]
    fn filter_and_clear() {
        let mut ledger = build_ledger();
        let range = DateRange::new(day(5), day(20)).unwrap();

        assert_eq!(ledger.filter(&range), 3);
        assert_eq!(ledger.history().len(), 5);

        // filtering again starts from the full history
        let wider = DateRange::new(day(1), day(31)).unwrap();
        assert_eq!(ledger.filter(&wider), 5);

        ledger.filter(&range);
        assert_eq!(ledger.clear_filter(), 5);
        assert_eq!(ledger.visible(), ledger.history());
    }

    #[test]
    fn filter_includes_added_transactions() {
        let mut ledger = build_ledger();
        ledger.insert(Transaction::with_date(Money::from_units(7), day(12))).unwrap();

        let range = DateRange::new(day(11), day(13)).unwrap();

        assert_eq!(ledger.filter(&range), 1);
        assert_eq!(ledger.visible()[0].amount, Money::from_units(7));
    }

    #[test]
    fn find_match_uses_visible_list() {
        let mut ledger = build_ledger();

        let result = ledger.find_match(Money::from_units(1500));
        assert_eq!(result, MatchResult::Found(0, 1));

        let (first, second) = ledger.matched_pair(&result).unwrap();
        assert_eq!(first.amount, Money::from_units(1000));
        assert_eq!(second.amount, Money::from_units(500));

        // 1000 and 1100 are both outside this range
        let range = DateRange::new(day(1), day(9)).unwrap();
        ledger.filter(&range);

        assert_eq!(ledger.find_match(Money::from_units(1500)), MatchResult::NotFound);
        assert_eq!(ledger.find_match(Money::from_units(1700)), MatchResult::Found(0, 1));
    }

    #[test]
    fn matched_pair_not_found() {
        let ledger = build_ledger();

        assert!(ledger.matched_pair(&MatchResult::NotFound).is_none());
        assert!(ledger.matched_pair(&MatchResult::Found(0, 99)).is_none());
    }
}
