//! Currency balance commands.

use clap::Subcommand;
use timegarden_core::CurrencyLedger;

use super::CliResult;

#[derive(Subcommand)]
pub enum CurrencyAction {
    /// Print the current balance
    Balance,
}

pub fn run(action: CurrencyAction) -> CliResult {
    let ledger = CurrencyLedger::load()?;
    match action {
        CurrencyAction::Balance => {
            println!("{}", ledger.balance());
        }
    }
    Ok(())
}
