/// Crate-wide result; typed errors are carried inside `anyhow::Error`
pub type Result<T = ()> = anyhow::Result<T>;
