use crate::error::GaslabError;
use csv::Writer;
use gaslab_schemas::report::{ReportValue, SampleReport};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ResultRow {
    parameter: String,
    value: String,
    specification: String,
    status: String,
}

/// Writes a report as a flat CSV table, one row per entry, for spreadsheet
/// import. Rows come out in report order.
pub struct ResultTableWriter {
    writer: Writer<fs::File>,
}

impl ResultTableWriter {
    pub fn new(path: &Path) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn write_report(&mut self, report: &SampleReport) -> Result<(), anyhow::Error> {
        for entry in &report.entries {
            let row = match &entry.value {
                ReportValue::Scalar { value } => ResultRow {
                    parameter: entry.label.clone(),
                    value: format!("{:.4}", value),
                    specification: String::new(),
                    status: String::new(),
                },
                ReportValue::Text { text } => ResultRow {
                    parameter: entry.label.clone(),
                    value: text.clone(),
                    specification: String::new(),
                    status: String::new(),
                },
                ReportValue::Check { verdict } => ResultRow {
                    parameter: entry.label.clone(),
                    value: format!("{:.2}", verdict.measured),
                    specification: verdict.rule.describe(),
                    status: if verdict.compliant { "PASS" } else { "FAIL" }.to_string(),
                },
            };
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Serializes the full report to JSON for machine consumers.
pub fn write_report_json(path: &Path, report: &SampleReport) -> Result<(), GaslabError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|e| GaslabError::FileIO(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaslab_schemas::spec::{SpecRule, Verdict};

    fn demo_report() -> SampleReport {
        let mut report = SampleReport::new("gas", "S-1");
        report.push_scalar("Molecular weight (g/mol)", 17.3205);
        report.push_check(
            "CO2",
            Verdict {
                measured: 2.0,
                rule: SpecRule::upper_bound(2.0, "% molar"),
                compliant: false,
            },
        );
        report
    }

    #[test]
    fn csv_table_has_one_row_per_entry() {
        let path = std::env::temp_dir()
            .join(format!("gaslab_{}_results.csv", std::process::id()));
        let mut writer = ResultTableWriter::new(&path).unwrap();
        writer.write_report(&demo_report()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3); // header + two entries
        assert!(lines[1].starts_with("Molecular weight (g/mol),17.3205"));
        assert!(lines[2].contains("FAIL"));
        assert!(lines[2].contains("< 2 % molar"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn json_round_trips_the_report() {
        let path = std::env::temp_dir()
            .join(format!("gaslab_{}_results.json", std::process::id()));
        let report = demo_report();
        write_report_json(&path, &report).unwrap();
        let parsed: SampleReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, report);
        fs::remove_file(path).ok();
    }
}
