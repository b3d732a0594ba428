//! One submodule per laboratory stream. Every module declares its own
//! specification table and assembles its report through the shared
//! validator, so pass/fail behavior is identical across streams.

pub mod amine;
pub mod gas;
pub mod gasoline;
pub mod glycol;
pub mod water;

use crate::error::GaslabError;
use crate::validation;
use gaslab_schemas::{
    file_formats::MeasuredSampleFile, report::SampleReport, spec::NamedSpec,
};

/// Builds the report for a manual-entry module: every parameter in the table
/// is validated in declaration order and recorded as a verdict entry.
pub fn manual_report(
    module: &str,
    file: &MeasuredSampleFile,
    table: &[NamedSpec],
) -> Result<SampleReport, GaslabError> {
    let verdicts = validation::validate_table(&file.measured(), table)?;

    let mut report = SampleReport::new(module, &file.sample_name);
    for (parameter, verdict) in verdicts {
        report.push_check(&parameter, verdict);
    }
    report.observations = file.observations.clone();
    Ok(report)
}
