use txm::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs warnings to stderr by default; `RUST_LOG` overrides the level
pub fn configure_logging() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .without_timestamps()
        .env()
        .init()?;

    Ok(())
}
