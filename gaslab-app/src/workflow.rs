use crate::config::ReportConfig;
use crate::plotting;
use crate::render;
use anyhow::{Context, Result};
use gaslab_core::{
    export::{self, ResultTableWriter},
    ingest,
    modules::{self, amine, gas, gasoline, glycol, water},
};
use gaslab_schemas::{report::SampleReport, spec::NamedSpec};
use std::fs;
use std::path::{Path, PathBuf};

/// Manual-entry lab streams sharing the measured-values workflow.
#[derive(Debug, Clone, Copy)]
pub enum ManualModule {
    Gasoline,
    Meg,
    Teg,
    Water,
    Amine,
}

impl ManualModule {
    pub fn name(&self) -> &'static str {
        match self {
            ManualModule::Gasoline => gasoline::MODULE,
            ManualModule::Meg => glycol::MEG_MODULE,
            ManualModule::Teg => glycol::TEG_MODULE,
            ManualModule::Water => water::MODULE,
            ManualModule::Amine => amine::MODULE,
        }
    }

    fn builtin_table(&self) -> Vec<NamedSpec> {
        match self {
            ManualModule::Gasoline => gasoline::spec_table(),
            ManualModule::Meg => glycol::meg_spec_table(),
            ManualModule::Teg => glycol::teg_spec_table(),
            ManualModule::Water => water::spec_table(),
            ManualModule::Amine => amine::spec_table(),
        }
    }
}

/// Runs the composition workflow: ingest the CSV sample, derive properties,
/// validate against the commercial table, and write every output artifact.
pub fn run_gas_analysis(
    csv_path: &Path,
    sample_name: &str,
    price_override: Option<f64>,
    config: &ReportConfig,
    output_base: &Path,
) -> Result<()> {
    println!(
        "\n--- [Gas] Analyzing composition from '{}' ---",
        csv_path.display()
    );

    let sample = ingest::read_composition_csv(csv_path)?;
    let price = price_override.unwrap_or(config.price_usd_per_mj);
    let report = gas::analyze(sample_name, &sample, Some(price))?;

    // Nothing is written until the analysis has fully succeeded.
    let run_dir = create_run_dir(output_base, gas::MODULE)?;
    write_outputs(&run_dir, &report, config)?;
    plotting::plot_composition(&run_dir, &sample)?;

    println!("\nAnalysis complete. Results are in '{}'", run_dir.display());
    Ok(())
}

/// Runs a manual-entry workflow: load the measured values, validate against
/// the module's table (or a site override), and write the outputs.
pub fn run_manual_analysis(
    module: ManualModule,
    input_path: &Path,
    specs_override: Option<&Path>,
    config: &ReportConfig,
    output_base: &Path,
) -> Result<()> {
    println!(
        "\n--- [{}] Validating sample from '{}' ---",
        module.name(),
        input_path.display()
    );

    let file = ingest::read_measured_yaml(input_path)?;
    let table = match specs_override {
        Some(path) => {
            println!("Using specification override from '{}'", path.display());
            ingest::read_spec_table_yaml(path)?
        }
        None => module.builtin_table(),
    };
    let report = modules::manual_report(module.name(), &file, &table)?;

    let run_dir = create_run_dir(output_base, module.name())?;
    write_outputs(&run_dir, &report, config)?;

    println!("\nAnalysis complete. Results are in '{}'", run_dir.display());
    Ok(())
}

fn create_run_dir(base: &Path, module: &str) -> Result<PathBuf> {
    let dir = base.join(format!(
        "{}_{}",
        module,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    Ok(dir)
}

fn write_outputs(run_dir: &Path, report: &SampleReport, config: &ReportConfig) -> Result<()> {
    render::write_text_report(&run_dir.join("report.txt"), report, config, chrono::Utc::now())?;
    export::write_report_json(&run_dir.join("results.json"), report)?;
    let mut table_writer = ResultTableWriter::new(&run_dir.join("results.csv"))?;
    table_writer.write_report(report)?;
    Ok(())
}
