//! Glycol circulation streams: MEG (hydrate inhibition) and TEG
//! (dehydration). The two share the module shape but carry separate tables.

use crate::error::GaslabError;
use crate::modules::manual_report;
use gaslab_schemas::{
    file_formats::MeasuredSampleFile,
    report::SampleReport,
    spec::{NamedSpec, SpecRule},
};

pub const MEG_MODULE: &str = "meg";
pub const TEG_MODULE: &str = "teg";

pub fn meg_spec_table() -> Vec<NamedSpec> {
    vec![
        NamedSpec::new("Concentration", SpecRule::range(78.0, 82.0, "wt%")),
        NamedSpec::new("pH", SpecRule::range(6.5, 8.5, "")),
        NamedSpec::new("Chlorides", SpecRule::upper_bound(50.0, "ppm")),
        NamedSpec::new("Density at 20C", SpecRule::range(1100.0, 1125.0, "kg/m3")),
    ]
}

pub fn teg_spec_table() -> Vec<NamedSpec> {
    vec![
        NamedSpec::new("Concentration", SpecRule::range(98.0, 100.0, "wt%")),
        NamedSpec::new("pH", SpecRule::range(6.0, 8.5, "")),
        NamedSpec::new("Water content", SpecRule::upper_bound(2.0, "wt%")),
        NamedSpec::new("Iron", SpecRule::upper_bound(15.0, "ppm")),
    ]
}

pub fn analyze_meg(file: &MeasuredSampleFile) -> Result<SampleReport, GaslabError> {
    manual_report(MEG_MODULE, file, &meg_spec_table())
}

pub fn analyze_teg(file: &MeasuredSampleFile) -> Result<SampleReport, GaslabError> {
    manual_report(TEG_MODULE, file, &teg_spec_table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn teg_file(concentration: f64) -> MeasuredSampleFile {
        MeasuredSampleFile {
            schema_version: "1".to_string(),
            sample_name: "Contactor lean TEG".to_string(),
            values: HashMap::from([
                ("Concentration".to_string(), concentration),
                ("pH".to_string(), 7.4),
                ("Water content".to_string(), 1.1),
                ("Iron".to_string(), 3.0),
            ]),
            observations: None,
        }
    }

    #[test]
    fn lean_teg_in_range() {
        let report = analyze_teg(&teg_file(99.1)).unwrap();
        assert!(report.is_fully_compliant());
    }

    #[test]
    fn diluted_teg_fails_concentration() {
        let report = analyze_teg(&teg_file(96.5)).unwrap();
        let conc = report
            .checks()
            .find(|(label, _)| *label == "Concentration")
            .unwrap()
            .1;
        assert!(!conc.compliant);
    }

    #[test]
    fn meg_table_boundaries_are_inclusive() {
        let file = MeasuredSampleFile {
            schema_version: "1".to_string(),
            sample_name: "MEG regen outlet".to_string(),
            values: HashMap::from([
                ("Concentration".to_string(), 82.0),
                ("pH".to_string(), 6.5),
                ("Chlorides".to_string(), 12.0),
                ("Density at 20C".to_string(), 1100.0),
            ]),
            observations: None,
        };
        let report = analyze_meg(&file).unwrap();
        assert!(report.is_fully_compliant());
    }
}
