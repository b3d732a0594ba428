//! File ingestion for the two input shapes the lab produces: a one-row CSV
//! chromatography export, and a YAML file of manually measured parameters.

use crate::error::GaslabError;
use gaslab_schemas::{
    component::Component,
    file_formats::{MeasuredSampleFile, SpecTableFile},
    sample::CompositionSample,
    spec::NamedSpec,
};
use std::fs;
use std::path::Path;

/// Reads a composition sample from a CSV export.
///
/// Column headers are matched against the component symbol set; columns with
/// unrecognized headers are dropped. Only the first data row is consulted;
/// any further rows are ignored.
pub fn read_composition_csv(path: &Path) -> Result<CompositionSample, GaslabError> {
    let display = path.display().to_string();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| GaslabError::CsvError(display.clone(), e))?;

    let headers = reader
        .headers()
        .map_err(|e| GaslabError::CsvError(display.clone(), e))?
        .clone();

    let record = match reader.records().next() {
        Some(result) => result.map_err(|e| GaslabError::CsvError(display.clone(), e))?,
        None => return Err(GaslabError::EmptyTable(display)),
    };

    let mut sample = CompositionSample::default();
    for (header, field) in headers.iter().zip(record.iter()) {
        let Some(component) = Component::from_symbol(header.trim()) else {
            continue;
        };
        let amount: f64 = field
            .trim()
            .parse()
            .map_err(|_| GaslabError::NumberParse(header.to_string(), field.to_string()))?;
        if amount < 0.0 {
            return Err(GaslabError::NegativeAmount(header.trim().to_string(), amount));
        }
        sample.insert(component, amount);
    }

    Ok(sample)
}

/// Reads one manually measured sample from a YAML file.
pub fn read_measured_yaml(path: &Path) -> Result<MeasuredSampleFile, GaslabError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path)
        .map_err(|e| GaslabError::FileIO(display.clone(), e))?;
    serde_yaml::from_str(&content).map_err(|e| GaslabError::YamlParsing(display, e))
}

/// Reads a site-specific specification table override from a YAML file.
pub fn read_spec_table_yaml(path: &Path) -> Result<Vec<NamedSpec>, GaslabError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path)
        .map_err(|e| GaslabError::FileIO(display.clone(), e))?;
    let file: SpecTableFile =
        serde_yaml::from_str(&content).map_err(|e| GaslabError::YamlParsing(display, e))?;
    Ok(file.specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_fixture(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gaslab_{}_{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_first_row_and_drops_unknown_columns() {
        let path = write_fixture(
            "composition.csv",
            "CH4,C2H6,He,CO2\n95.0,3.0,42.0,2.0\n10.0,10.0,10.0,70.0\n",
        );
        let sample = read_composition_csv(&path).unwrap();
        assert_eq!(sample.amount(Component::Methane), 95.0);
        assert_eq!(sample.amount(Component::Ethane), 3.0);
        assert_eq!(sample.amount(Component::CarbonDioxide), 2.0);
        // Helium column dropped, second row never consulted.
        assert_eq!(sample.amounts.len(), 3);
        fs::remove_file(path).ok();
    }

    #[test]
    fn header_only_file_is_an_empty_table() {
        let path = write_fixture("empty.csv", "CH4,CO2\n");
        let err = read_composition_csv(&path).unwrap_err();
        assert!(matches!(err, GaslabError::EmptyTable(_)));
        fs::remove_file(path).ok();
    }

    #[test]
    fn non_numeric_field_names_its_column() {
        let path = write_fixture("bad.csv", "CH4,CO2\n95.0,high\n");
        let err = read_composition_csv(&path).unwrap_err();
        assert!(matches!(err, GaslabError::NumberParse(column, _) if column == "CO2"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn reads_measured_sample_yaml() {
        let path = write_fixture(
            "water.yaml",
            concat!(
                "schema_version: \"1\"\n",
                "sample_name: \"Boiler feed 14\"\n",
                "values:\n",
                "  pH: 7.1\n",
                "  Conductivity: 2.4\n",
                "observations: \"Sampled after regeneration\"\n",
            ),
        );
        let file = read_measured_yaml(&path).unwrap();
        assert_eq!(file.sample_name, "Boiler feed 14");
        assert_eq!(file.measured().get("pH"), Some(7.1));
        assert_eq!(file.observations.as_deref(), Some("Sampled after regeneration"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn reads_spec_table_yaml() {
        let path = write_fixture(
            "specs.yaml",
            concat!(
                "schema_version: \"1\"\n",
                "specs:\n",
                "  - parameter: \"Chlorides\"\n",
                "    rule:\n",
                "      limit:\n",
                "        type: upper_bound\n",
                "        reference: 1.0\n",
                "      unit: \"ppm\"\n",
                "  - parameter: \"pH\"\n",
                "    rule:\n",
                "      limit:\n",
                "        type: range\n",
                "        low: 6.5\n",
                "        high: 7.5\n",
                "      unit: \"\"\n",
            ),
        );
        let specs = read_spec_table_yaml(&path).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].parameter, "Chlorides");
        assert_eq!(specs[0].rule.describe(), "< 1 ppm");
        fs::remove_file(path).ok();
    }
}
