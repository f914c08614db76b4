//! `clinic` command-line tool
//!
//! Usage:
//!   clinic [--config clinic.yaml] [--verbose] <demo | simulate FILE | config>

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use clinic_cli::{load_config, run, run_demo, Clinic, Outcome, Scenario};
use colored::Colorize;
use error_common::log_error;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "clinic")]
#[command(version, about = "Clinic order and billing engine")]
struct Cli {
    /// Configuration file (YAML, TOML or JSON)
    #[arg(long, global = true, env = "CLINIC_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Seed sample staff and a patient, admit an order and print its invoice
    Demo,
    /// Replay a YAML scenario of users, patients, orders and invoices
    Simulate {
        /// Scenario file
        scenario: PathBuf,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("loading configuration")?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    logger_redacted::init(&config.logging)?;

    match cli.command {
        Commands::Config => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
        Commands::Demo => {
            let clinic = Clinic::new(config);
            let report = run_demo(&clinic, Local::now().naive_local()).map_err(|e| {
                log_error("demo", &e);
                e
            })?;

            println!("{}", "Staff".bold());
            for account in &report.staff {
                println!("  {} ({})", account.username, account.role);
            }
            println!("{}", "Patient".bold());
            println!("  {} {}", report.patient.id, report.patient.full_name);
            println!("{}", "History".bold());
            for entry in &report.history {
                println!("  {} {}", entry.recorded_at, entry.reason);
            }
            println!("{}", format!("Order {}", report.order.id).bold());
            for item in &report.order.items {
                println!("  #{} {} {}", item.number, item.name, item.cost);
            }
            println!("{}", "Invoice".bold());
            println!("  {}", report.invoice.to_string().green());
        }
        Commands::Simulate { scenario } => {
            let loaded = Scenario::from_path(&scenario)?;
            let clinic = Clinic::new(config);
            info!(path = %scenario.display(), "Running scenario");

            for outcome in run(&clinic, &loaded) {
                print_outcome(&outcome);
            }
        }
    }

    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    let line = outcome.to_string();
    if outcome.is_success() {
        println!("{} {}", "ok".green(), line);
    } else {
        println!("{} {}", "rejected".red(), line);
    }
}
