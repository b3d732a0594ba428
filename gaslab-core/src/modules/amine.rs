//! MDEA amine circulation for acid gas removal.

use crate::error::GaslabError;
use crate::modules::manual_report;
use gaslab_schemas::{
    file_formats::MeasuredSampleFile,
    report::SampleReport,
    spec::{NamedSpec, SpecRule},
};

pub const MODULE: &str = "amine";

pub fn spec_table() -> Vec<NamedSpec> {
    vec![
        NamedSpec::new("Concentration", SpecRule::range(45.0, 50.0, "wt%")),
        NamedSpec::new("Rich H2S loading", SpecRule::upper_bound(0.45, "mol/mol")),
        NamedSpec::new("Lean H2S loading", SpecRule::upper_bound(0.01, "mol/mol")),
        NamedSpec::new("Iron", SpecRule::upper_bound(10.0, "ppm")),
        NamedSpec::new("Foam height", SpecRule::upper_bound(30.0, "mL")),
    ]
}

pub fn analyze(file: &MeasuredSampleFile) -> Result<SampleReport, GaslabError> {
    manual_report(MODULE, file, &spec_table())
}
