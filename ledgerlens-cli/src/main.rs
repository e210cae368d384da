use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ledgerlens_core::TransactionSet;

mod export;
mod render;

#[derive(Parser, Debug)]
#[command(
    name = "ledgerlens",
    version,
    about = "Turn extracted bank-statement text into categorized transactions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse extracted statement text and print transactions plus summaries
    Parse {
        /// Path to the extracted statement text (UTF-8, newline separated)
        input: PathBuf,

        /// Emit the full result as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Parse extracted statement text and write the transactions to CSV
    Export {
        /// Path to the extracted statement text
        input: PathBuf,

        /// Output CSV path
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { input, json } => {
            let set = parse_file(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&set)?);
            } else {
                render::print_report(&set);
            }
        }

        Command::Export { input, out } => {
            let set = parse_file(&input)?;
            export::write_csv(&set, &out)?;
            println!(
                "Wrote {} transactions to {}",
                set.transactions.len(),
                out.display()
            );
        }
    }

    Ok(())
}

fn parse_file(path: &Path) -> Result<TransactionSet> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(ledgerlens_ingest::parse(&text))
}
