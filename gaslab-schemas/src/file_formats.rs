use crate::{sample::MeasuredValues, spec::NamedSpec};
use serde::Deserialize;
use std::collections::HashMap;

/// On-disk form of a manually measured sample (gasoline, MEG, TEG, water,
/// amine modules). One file describes exactly one sample.
#[derive(Debug, Deserialize)]
pub struct MeasuredSampleFile {
    pub schema_version: String,
    pub sample_name: String,
    pub values: HashMap<String, f64>,
    pub observations: Option<String>,
}

impl MeasuredSampleFile {
    pub fn measured(&self) -> MeasuredValues {
        MeasuredValues { values: self.values.clone() }
    }
}

/// On-disk form of a site-specific specification table override.
#[derive(Debug, Deserialize)]
pub struct SpecTableFile {
    pub schema_version: String,
    pub specs: Vec<NamedSpec>,
}
