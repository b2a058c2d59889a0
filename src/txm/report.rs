use serde::{Deserialize, Serialize};

/// One row of output describing what a command did
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CommandReport {
    pub command: String,
    pub outcome: String,
    pub detail: String,
}

impl CommandReport {
    pub fn new(command: &str, outcome: &str, detail: impl Into<String>) -> Self {
        Self {
            command: command.to_string(),
            outcome: outcome.to_string(),
            detail: detail.into(),
        }
    }

    pub fn rejected(command: &str, error: &anyhow::Error) -> Self {
        Self::new(command, "rejected", error.to_string())
    }
}
