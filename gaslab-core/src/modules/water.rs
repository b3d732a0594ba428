//! Demineralized water for boiler feed and dilution service.

use crate::error::GaslabError;
use crate::modules::manual_report;
use gaslab_schemas::{
    file_formats::MeasuredSampleFile,
    report::SampleReport,
    spec::{NamedSpec, SpecRule},
};

pub const MODULE: &str = "water";

pub fn spec_table() -> Vec<NamedSpec> {
    vec![
        NamedSpec::new("Conductivity", SpecRule::upper_bound(5.0, "uS/cm")),
        NamedSpec::new("pH", SpecRule::range(6.5, 7.5, "")),
        NamedSpec::new("Chlorides", SpecRule::upper_bound(1.0, "ppm")),
        NamedSpec::new("Silica", SpecRule::upper_bound(0.02, "ppm")),
        NamedSpec::new("Total hardness", SpecRule::upper_bound(1.0, "ppm CaCO3")),
    ]
}

pub fn analyze(file: &MeasuredSampleFile) -> Result<SampleReport, GaslabError> {
    manual_report(MODULE, file, &spec_table())
}
