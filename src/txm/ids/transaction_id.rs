use crate::Result;

use std::fmt;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(pub Uuid);

impl TransactionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(string: &str) -> Result<Self> {
        let uuid = Uuid::parse_str(string.trim())?;
        return Ok(Self(uuid));
    }

    /// First 8 characters of the hyphenated form, as shown in listings
    pub fn short(&self) -> String {
        let hyphenated = self.0.hyphenated().to_string();
        return hyphenated[..8].to_string();
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0.hyphenated());
    }
}
