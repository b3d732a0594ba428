use crate::spec::Verdict;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportValue {
    Scalar { value: f64 },
    Text { text: String },
    Check { verdict: Verdict },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub label: String,
    pub value: ReportValue,
}

/// Everything that appears on the printed report for one sample, in the
/// exact order the module inserted it. Renderers must preserve this order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleReport {
    pub module: String,
    pub sample_name: String,
    pub entries: Vec<ReportEntry>,
    pub observations: Option<String>,
}

impl SampleReport {
    pub fn new(module: &str, sample_name: &str) -> Self {
        Self {
            module: module.to_string(),
            sample_name: sample_name.to_string(),
            entries: Vec::new(),
            observations: None,
        }
    }

    pub fn push_scalar(&mut self, label: &str, value: f64) {
        self.entries.push(ReportEntry {
            label: label.to_string(),
            value: ReportValue::Scalar { value },
        });
    }

    pub fn push_text(&mut self, label: &str, text: &str) {
        self.entries.push(ReportEntry {
            label: label.to_string(),
            value: ReportValue::Text { text: text.to_string() },
        });
    }

    pub fn push_check(&mut self, label: &str, verdict: Verdict) {
        self.entries.push(ReportEntry {
            label: label.to_string(),
            value: ReportValue::Check { verdict },
        });
    }

    /// Verdict entries in report order.
    pub fn checks(&self) -> impl Iterator<Item = (&str, &Verdict)> {
        self.entries.iter().filter_map(|entry| match &entry.value {
            ReportValue::Check { verdict } => Some((entry.label.as_str(), verdict)),
            _ => None,
        })
    }

    /// True when every verdict on the report is compliant.
    pub fn is_fully_compliant(&self) -> bool {
        self.checks().all(|(_, verdict)| verdict.compliant)
    }
}
