mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::deposit::{ChartArgs, DepositArgs};
use commands::export::{EmailArgs, ExportArgs};

/// Recurring deposit maturity projections
#[derive(Parser)]
#[command(
    name = "rdcalc",
    version,
    about = "Recurring deposit maturity projections",
    long_about = "Projects the maturity value of a recurring deposit compounded \
                  quarterly, derives chart series from the monthly timeline, and \
                  exports a dated text report to disk or an email outbox."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project maturity amount, interest, and the monthly timeline
    Project(DepositArgs),
    /// Summary figures plus breakdown, growth, or quarterly chart data
    Chart(ChartArgs),
    /// Write a text report of the projection
    Export(ExportArgs),
    /// Send the report to a recipient via the outbox
    Email(EmailArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
    Yaml,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Project(args) => commands::deposit::run_project(args),
        Commands::Chart(args) => commands::deposit::run_chart(args),
        Commands::Export(args) => commands::export::run_export(args),
        Commands::Email(args) => commands::export::run_email(args),
        Commands::Version => {
            println!("rdcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
