use crate::input::{Command, InputCommand};
use crate::matcher::MatchResult;
use crate::source::TransactionSource;
use crate::Result;
use crate::{CommandReport, Ledger, Money};

/// Applies script commands to a ledger and describes the outcome of each
#[derive(Debug, Default)]
pub struct TransactionService {
    ledger: Ledger,
}

impl TransactionService {
    pub fn new(ledger: Ledger) -> Self {
        return Self { ledger };
    }

    pub async fn load(source: &dyn TransactionSource) -> Result<Self> {
        let transactions = source.fetch().await?;
        log::debug!("Loaded {} transactions", transactions.len());

        let ledger = Ledger::load(transactions)?;

        return Ok(Self::new(ledger));
    }

    pub fn ledger(&self) -> &Ledger {
        return &self.ledger;
    }

    /// Parses and applies a script row. Failures are reported as a `rejected` row.
    pub fn process_input(&mut self, input: InputCommand) -> Vec<CommandReport> {
        let name = input.command.name();

        log::debug!("Parsing input into Command: {input:?}");
        let result = input
            .parse_command()
            .and_then(|command| self.process_command(command));

        match result {
            Ok(reports) => reports,
            Err(e) => {
                log::warn!("Rejected {name} command: {e}");
                vec![CommandReport::rejected(name, &e)]
            }
        }
    }

    pub fn process_command(&mut self, command: Command) -> Result<Vec<CommandReport>> {
        log::debug!("Processing command: {command:?}");

        let reports = match command {
            Command::Add { amount } => vec![self.process_add(amount)?],

            Command::Filter { range } => {
                let count = self.ledger.filter(&range);
                vec![CommandReport::new("filter", "filtered", count.to_string())]
            }

            Command::Clear => {
                let count = self.ledger.clear_filter();
                vec![CommandReport::new("clear", "cleared", count.to_string())]
            }

            Command::Match { target } => vec![self.process_match(target)],

            Command::List => self.process_list(),
        };

        return Ok(reports);
    }

    fn process_add(&mut self, amount: Money) -> Result<CommandReport> {
        let tx = self.ledger.add(amount)?;

        log::debug!("Successfully added transaction: {tx:?}");

        return Ok(CommandReport::new(
            "add",
            "added",
            format!("{} {}", tx.id.short(), tx.amount),
        ));
    }

    fn process_match(&self, target: Money) -> CommandReport {
        let result = self.ledger.find_match(target);

        log::debug!("Match result for {target}: {result:?}");

        match self.ledger.matched_pair(&result) {
            Some((first, second)) => {
                CommandReport::new("match", "matched", format!("{} {}", first.id, second.id))
            }
            None => {
                if let MatchResult::Found(i, j) = result {
                    log::error!("Impossible state encountered: match ({i}, {j}) outside of visible list");
                }

                CommandReport::new("match", "not_found", "")
            }
        }
    }

    fn process_list(&self) -> Vec<CommandReport> {
        let visible = self.ledger.visible();

        let mut reports = Vec::with_capacity(visible.len() + 1);
        reports.push(CommandReport::new("list", "listed", visible.len().to_string()));

        for tx in visible.iter() {
            reports.push(CommandReport::new(
                "list",
                "item",
                format!("{} {} {}", tx.id.short(), tx.amount, tx.display_date()),
            ));
        }

        return reports;
    }
}
