use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

mod config;
mod plotting;
mod render;
mod workflow;

use config::ReportConfig;
use workflow::ManualModule;

#[derive(Parser)]
#[command(
    name = "gaslab",
    version,
    about = "Quality analysis for gas plant laboratory streams"
)]
struct Cli {
    /// Report configuration YAML (title, logo, default price)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base directory for analysis output
    #[arg(long, global = true, default_value = "./reports")]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a natural gas composition from a one-row CSV export
    Gas {
        /// CSV file with component columns (CH4, C2H6, ..., O2)
        csv: PathBuf,
        /// Sample name printed on the report
        #[arg(long, default_value = "Sample")]
        name: String,
        /// Price in USD per MJ for the estimated revenue entry
        #[arg(long)]
        price: Option<f64>,
    },
    /// Validate a natural gasoline sample
    Gasoline(ManualArgs),
    /// Validate a MEG circulation sample
    Meg(ManualArgs),
    /// Validate a TEG circulation sample
    Teg(ManualArgs),
    /// Validate a demineralized water sample
    Water(ManualArgs),
    /// Validate an amine circulation sample
    Amine(ManualArgs),
}

#[derive(Args)]
struct ManualArgs {
    /// YAML file with the measured values for this sample
    input: PathBuf,
    /// YAML specification table overriding the built-in one
    #[arg(long)]
    specs: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("--- Gaslab Quality Analysis ---");

    let report_config = match &cli.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };

    match &cli.command {
        Command::Gas { csv, name, price } => {
            workflow::run_gas_analysis(csv, name, *price, &report_config, &cli.output_dir)
        }
        Command::Gasoline(args) => {
            run_manual(ManualModule::Gasoline, args, &report_config, &cli.output_dir)
        }
        Command::Meg(args) => run_manual(ManualModule::Meg, args, &report_config, &cli.output_dir),
        Command::Teg(args) => run_manual(ManualModule::Teg, args, &report_config, &cli.output_dir),
        Command::Water(args) => {
            run_manual(ManualModule::Water, args, &report_config, &cli.output_dir)
        }
        Command::Amine(args) => {
            run_manual(ManualModule::Amine, args, &report_config, &cli.output_dir)
        }
    }
}

fn run_manual(
    module: ManualModule,
    args: &ManualArgs,
    config: &ReportConfig,
    output_dir: &Path,
) -> Result<()> {
    workflow::run_manual_analysis(module, &args.input, args.specs.as_deref(), config, output_dir)
}
