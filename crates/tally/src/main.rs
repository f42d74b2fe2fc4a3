//! tally-import - Import a plain-text ledger file and report what was found.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use tally_loader::import_ledger;

#[derive(Debug, Parser)]
#[command(name = "tally-import", version, about = "Imports a plain-text ledger file")]
struct Cli {
    /// Path to the ledger file
    path: PathBuf,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match import_ledger(&cli.path) {
        Ok(ledger) => {
            println!("Imported {} transactions", ledger.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
