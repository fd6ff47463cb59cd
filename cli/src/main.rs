//! Tournament settlement CLI.
//!
//! Usage:
//!   feltbook settle --file tournament.yaml [--json]
//!   feltbook audit --file tournament.yaml
//!
//! The sheet is a YAML file with the tournament name, entry economics, and
//! per-player rows (chips, buy-ins, amount paid). `settle` prints the full
//! settlement report; `audit` only reconciles chip counts.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use feltbook_settlement::{audit_chips, render_net_positions, render_report, settle_traced};

mod config;
use config::TournamentFile;

#[derive(Parser, Debug)]
#[command(author, version, about = "Poker tournament settlement")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the prize settlement and print the report.
    Settle {
        /// Tournament sheet (YAML).
        #[arg(short, long)]
        file: PathBuf,

        /// Emit the raw settlement as JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },
    /// Reconcile counted chips against the buy-in total.
    Audit {
        /// Tournament sheet (YAML).
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn load_sheet(path: &PathBuf) -> Result<TournamentFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading tournament sheet {}", path.display()))?;
    let sheet: TournamentFile = serde_yaml::from_str(&raw)
        .with_context(|| format!("parsing tournament sheet {}", path.display()))?;
    sheet
        .economics
        .validate()
        .context("invalid entry economics")?;
    Ok(sheet)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    match args.command {
        Command::Settle { file, json } => {
            let sheet = load_sheet(&file)?;
            let standings = sheet.standings();
            let (settlement, _trace) = settle_traced(&sheet.economics, &standings);

            if json {
                println!("{}", serde_json::to_string_pretty(&settlement)?);
                return Ok(());
            }

            let audit = audit_chips(
                sheet.starting_stack,
                sheet.economics.buyin_count,
                &standings,
            );
            print!(
                "{}",
                render_report(&sheet.name, &sheet.economics, &settlement, Some(&audit))
            );

            let ledger = sheet.ledger();
            let positions = ledger.net_settlement(&settlement, sheet.economics.entry_fee);
            print!("{}", render_net_positions(&positions));
        }
        Command::Audit { file } => {
            let sheet = load_sheet(&file)?;
            let standings = sheet.standings();
            let audit = audit_chips(
                sheet.starting_stack,
                sheet.economics.buyin_count,
                &standings,
            );
            info!(
                expected = audit.expected,
                counted = audit.counted,
                delta = audit.delta,
                "chip audit"
            );
            println!(
                "chip audit: expected {}, counted {}, delta {:+} ({})",
                audit.expected,
                audit.counted,
                audit.delta,
                if audit.balanced() { "balanced" } else { "OFF" }
            );
        }
    }

    Ok(())
}
