//! Natural gasoline (C5+) stream.

use crate::error::GaslabError;
use crate::modules::manual_report;
use gaslab_schemas::{
    file_formats::MeasuredSampleFile,
    report::SampleReport,
    spec::{NamedSpec, SpecRule},
};

pub const MODULE: &str = "gasoline";

pub fn spec_table() -> Vec<NamedSpec> {
    vec![
        NamedSpec::new("RVP", SpecRule::upper_bound(12.0, "psia")),
        NamedSpec::new("Density at 15C", SpecRule::range(600.0, 700.0, "kg/m3")),
        NamedSpec::new("Sulfur", SpecRule::upper_bound(350.0, "ppm")),
        NamedSpec::new("Water content", SpecRule::upper_bound(0.1, "% vol")),
    ]
}

pub fn analyze(file: &MeasuredSampleFile) -> Result<SampleReport, GaslabError> {
    manual_report(MODULE, file, &spec_table())
}
