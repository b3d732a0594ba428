use crate::config::ReportConfig;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use gaslab_schemas::report::{ReportValue, SampleReport};
use std::fs;
use std::path::Path;

/// Renders the printable plain-text document for one sample.
///
/// Entries are emitted in report order. Derived and raw values print at four
/// decimals; the validation section starts at the first verdict entry, with
/// measured values at two decimals next to the rule they were checked
/// against.
pub fn render_text(
    report: &SampleReport,
    config: &ReportConfig,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", config.title));
    out.push_str(&format!(
        "Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("Module: {}\n", report.module));
    out.push_str(&format!("Sample: {}\n\n", report.sample_name));

    let mut in_validation_section = false;
    for entry in &report.entries {
        match &entry.value {
            ReportValue::Scalar { value } => {
                out.push_str(&format!("{}: {:.4}\n", entry.label, value));
            }
            ReportValue::Text { text } => {
                out.push_str(&format!("{}: {}\n", entry.label, text));
            }
            ReportValue::Check { verdict } => {
                if !in_validation_section {
                    out.push_str("\nParameter validation:\n");
                    in_validation_section = true;
                }
                let status = if verdict.compliant { "PASS" } else { "FAIL" };
                out.push_str(&format!(
                    "{} {}: {:.2} ({})\n",
                    status,
                    entry.label,
                    verdict.measured,
                    verdict.rule.describe()
                ));
            }
        }
    }

    if let Some(observations) = &report.observations {
        out.push_str(&format!("\nObservations:\n{}\n", observations));
    }

    out
}

pub fn write_text_report(
    path: &Path,
    report: &SampleReport,
    config: &ReportConfig,
    generated_at: DateTime<Utc>,
) -> Result<()> {
    fs::write(path, render_text(report, config, generated_at))
        .with_context(|| format!("Failed to write report to {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gaslab_schemas::spec::{SpecRule, Verdict};

    #[test]
    fn rendered_report_keeps_order_and_sections() {
        let mut report = SampleReport::new("gas", "Wellhead 7");
        report.push_scalar("Molecular weight (g/mol)", 17.3205);
        report.push_check(
            "CO2",
            Verdict {
                measured: 2.0,
                rule: SpecRule::upper_bound(2.0, "% molar"),
                compliant: false,
            },
        );
        report.observations = Some("Sampled at 08:15".to_string());

        let config = ReportConfig::default();
        let generated_at = Utc.with_ymd_and_hms(2024, 5, 14, 9, 30, 0).unwrap();
        let text = render_text(&report, &config, generated_at);

        let expected = "\
Gas Plant Laboratory Analysis Report
Generated: 2024-05-14 09:30:00 UTC
Module: gas
Sample: Wellhead 7

Molecular weight (g/mol): 17.3205

Parameter validation:
FAIL CO2: 2.00 (< 2 % molar)

Observations:
Sampled at 08:15
";
        assert_eq!(text, expected);
    }
}
