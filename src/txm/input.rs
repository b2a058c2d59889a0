use crate::ids::TransactionId;
use crate::range::DateRange;
use crate::Money;
use crate::Result;
use crate::Transaction;

use chrono::{DateTime, NaiveDate, Utc};

use serde::Deserialize;

use thiserror::Error;

/// Represents a row of a command script
#[derive(Deserialize, Debug, Clone)]
pub struct InputCommand {
    pub command: InputCommandType,
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputCommandType {
    Add,
    Filter,
    Clear,
    Match,
    List,
}

impl InputCommandType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Filter => "filter",
            Self::Clear => "clear",
            Self::Match => "match",
            Self::List => "list",
        }
    }
}

/// Typed command, ready to be applied to a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { amount: Money },
    Filter { range: DateRange },
    Clear,
    Match { target: Money },
    List,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Please enter an amount")]
    MissingAmount,

    #[error("Please select a date range")]
    MissingRange,

    #[error("Invalid date: {0:?}")]
    InvalidDate(String),
}

impl InputCommand {
    pub fn parse_command(self) -> Result<Command> {
        let command = match self.command {
            InputCommandType::Add => Command::Add {
                amount: parse_amount(self.amount.as_deref())?,
            },
            InputCommandType::Filter => {
                let from = present(self.from.as_deref());
                let to = present(self.to.as_deref());

                let (from, to) = match (from, to) {
                    (Some(from), Some(to)) => (from, to),
                    _ => Err(InputParseError::MissingRange)?,
                };

                Command::Filter {
                    range: DateRange::new(parse_date(from)?, parse_date(to)?)?,
                }
            }
            InputCommandType::Clear => Command::Clear,
            InputCommandType::Match => Command::Match {
                target: parse_amount(self.amount.as_deref())?,
            },
            InputCommandType::List => Command::List,
        };

        Ok(command)
    }
}

/// Represents a row of a seed file
#[derive(Deserialize, Debug, Clone)]
pub struct SeedRecord {
    pub id: String,
    pub amount: String,
    pub date: String,
}

impl SeedRecord {
    pub fn parse_transaction(self) -> Result<Transaction> {
        Ok(Transaction {
            id: TransactionId::parse(&self.id)?,
            amount: Money::parse(&self.amount)?,
            date: parse_date(&self.date)?,
        })
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parses free-text amount input, treating blank input as missing
pub fn parse_amount(value: Option<&str>) -> Result<Money> {
    let value = present(value).ok_or(InputParseError::MissingAmount)?;
    Money::parse(value)
}

/// Parses a date picker value (`YYYY-MM-DD`, read as midnight UTC) or an RFC 3339 timestamp
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    let date = DateTime::parse_from_rfc3339(value)
        .map_err(|_| InputParseError::InvalidDate(value.to_string()))?;

    Ok(date.with_timezone(&Utc))
}
