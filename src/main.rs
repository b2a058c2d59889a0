mod args;
mod config;
mod reader;
mod writer;

use txm::input::{InputCommand, SeedRecord};
use txm::services::TransactionService;
use txm::source::StaticSource;
use txm::{CommandReport, Result, Transaction};

use std::path::Path;

#[tokio::main]
async fn main() -> Result {
    config::configure_logging()?;

    log::debug!("Application configured. Loading transactions...");

    let input_args = args::parse_input_args()?;
    log::debug!("Found input args: {input_args:?}");

    let source = match input_args.seed {
        Some(seed) => StaticSource::new(read_seed(&seed)?),
        None => StaticSource::mocked(),
    };

    let mut service = TransactionService::load(&source).await?;

    log::debug!("Transactions loaded. Running script...");

    let reports = run_script(&mut service, &input_args.script)?;

    log::debug!("Script complete. Writing {} report rows...", reports.len());

    let output = writer::write_reports(&reports)?;
    print!("{}", output);

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Reads every seed record; a bad record fails the whole load
fn read_seed(path: &Path) -> Result<Vec<Transaction>> {
    let mut rdr = reader::build_csv_reader(path)?;

    let mut transactions = vec![];

    for record in rdr.deserialize::<SeedRecord>() {
        log::debug!("Parsing seed record: {record:?}");
        transactions.push(record?.parse_transaction()?);
    }

    Ok(transactions)
}

/// Applies each script row in order, collecting the report rows
fn run_script(service: &mut TransactionService, path: &Path) -> Result<Vec<CommandReport>> {
    let mut rdr = reader::build_csv_reader(path)?;

    let mut reports = vec![];

    for record in rdr.deserialize::<InputCommand>() {
        let input = match record {
            Ok(input) => input,
            Err(e) => {
                log::warn!("{e}");
                reports.push(CommandReport::new("unknown", "rejected", e.to_string()));
                continue;
            }
        };

        reports.extend(service.process_input(input));
    }

    Ok(reports)
}
