mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::analyze::{AnalyzeArgs, ValidateArgs};
use commands::bill::MapBillArgs;
use commands::kpi::{IrrArgs, NpvArgs, PaybackArgs};

/// Solar project financial analysis
#[derive(Parser)]
#[command(
    name = "sfa",
    version,
    about = "Solar project financial analysis",
    long_about = "A CLI for simulating solar project economics with decimal precision. \
                  Projects multi-decade production and costs from a bill-derived energy \
                  profile and derives NPV, IRR, payback, ROI, and LCOE."
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
    /// Run the full simulation: production, costs, cashflow, KPIs
    Analyze(AnalyzeArgs),
    /// Validate a parameter set without simulating
    Validate(ValidateArgs),
    /// Net present value of a cash flow series
    Npv(NpvArgs),
    /// Internal rate of return of a cash flow series
    Irr(IrrArgs),
    /// Simple (or discounted, with --rate) payback year
    Payback(PaybackArgs),
    /// Derive project parameters from extracted bill data
    MapBill(MapBillArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::analyze::run_analyze(args),
        Commands::Validate(args) => commands::analyze::run_validate(args),
        Commands::Npv(args) => commands::kpi::run_npv(args),
        Commands::Irr(args) => commands::kpi::run_irr(args),
        Commands::Payback(args) => commands::kpi::run_payback(args),
        Commands::MapBill(args) => commands::bill::run_map_bill(args),
        Commands::Version => {
            println!("sfa {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::render(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
