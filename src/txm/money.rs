use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point amount, stored as ten-thousandths of a unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);
    pub const ZERO: Self = Self(0);

    const SCALE: i64 = 10000;
    const DECIMALS: usize = 4;

    /// Whole units to `Money`. `units` must stay within `i64::MAX / 10000` in magnitude.
    pub fn from_units(units: i64) -> Self {
        Self(units * Self::SCALE)
    }

    /// Parses free text such as `1000`, `-12.5` or `+0.0001`
    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let mut parts = digits.split('.');

        let whole = parts.next().unwrap_or_default();
        let frac = parts.next().unwrap_or_default();

        if parts.next().is_some() {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        if whole.is_empty() && frac.is_empty() {
            Err(MoneyError::Parse("No digits", string.to_string()))?
        }

        if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            Err(MoneyError::Parse("Not a number", string.to_string()))?
        }

        if frac.len() > Self::DECIMALS {
            Err(MoneyError::Parse("Too many decimal places", string.to_string()))?
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse()? };
        let frac: i64 = format!("{:0<4}", frac).parse()?;

        let value = whole
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(|| MoneyError::Parse("Amount out of range", string.to_string()))?;

        if negative {
            return Ok(Money(-value));
        }

        Ok(Money(value))
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();

        let scale = Self::SCALE as u64;
        let whole = abs / scale;
        let frac = abs % scale;

        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }

        let frac = format!("{frac:04}");
        return write!(f, "{sign}{whole}.{}", frac.trim_end_matches('0'));
    }
}
