pub mod ids;
pub mod input;
mod ledger;
pub mod matcher;
mod money;
pub mod range;
mod report;
mod result;
pub mod services;
pub mod source;
mod transaction;

pub use ledger::{Ledger, LedgerError};
pub use matcher::{find_pair, MatchResult};
pub use money::{Money, MoneyError};
pub use range::{filter_by_range, DateRange, RangeError};
pub use report::CommandReport;
pub use result::Result;
pub use transaction::Transaction;
