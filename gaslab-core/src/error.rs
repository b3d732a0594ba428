use thiserror::Error;

#[derive(Debug, Error)]
pub enum GaslabError {
    #[error("Composition amounts sum to {0}; the total must be a positive finite number")]
    NonPositiveTotal(f64),

    #[error("Component '{0}' has a negative amount ({1})")]
    NegativeAmount(String, f64),

    #[error("Value in column '{0}' is not a number: '{1}'")]
    NumberParse(String, String),

    #[error("Measured value for '{0}' is not a finite number")]
    NonFiniteMeasurement(String),

    #[error("Required parameter '{0}' is missing from the sample")]
    MissingParameter(String),

    #[error("Specification range for '{parameter}' is inverted: low {low} exceeds high {high}")]
    InvertedRange {
        parameter: String,
        low: f64,
        high: f64,
    },

    #[error("No data rows found in '{0}'")]
    EmptyTable(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("An error occurred while rendering the report: {0}")]
    RenderingError(#[from] anyhow::Error),
}
