use crate::component::Component;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One chromatography sample: raw molar amounts per component.
/// Amounts may be on a percent or fractional scale; the calculator
/// normalizes by the total, so both yield identical results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositionSample {
    pub amounts: HashMap<Component, f64>,
}

impl CompositionSample {
    /// Builds a sample from named columns, discarding any name that is not
    /// part of the tracked component set.
    pub fn from_named<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let amounts = values
            .into_iter()
            .filter_map(|(name, value)| {
                Component::from_symbol(name.as_ref()).map(|c| (c, value))
            })
            .collect();
        Self { amounts }
    }

    pub fn insert(&mut self, component: Component, amount: f64) {
        self.amounts.insert(component, amount);
    }

    /// Raw amount for a component; absent components count as zero.
    pub fn amount(&self, component: Component) -> f64 {
        self.amounts.get(&component).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.amounts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// Manually measured parameters for the non-chromatography modules
/// (gasoline, glycols, demineralized water, amines).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasuredValues {
    pub values: HashMap<String, f64>,
}

impl MeasuredValues {
    pub fn get(&self, parameter: &str) -> Option<f64> {
        self.values.get(parameter).copied()
    }

    pub fn set(&mut self, parameter: &str, value: f64) {
        self.values.insert(parameter.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_are_discarded() {
        let sample = CompositionSample::from_named(vec![
            ("CH4".to_string(), 95.0),
            ("He".to_string(), 1.0),
            ("CO2".to_string(), 5.0),
        ]);
        assert_eq!(sample.amounts.len(), 2);
        assert_eq!(sample.amount(Component::Methane), 95.0);
        assert_eq!(sample.amount(Component::CarbonDioxide), 5.0);
    }

    #[test]
    fn absent_component_counts_as_zero() {
        let sample = CompositionSample::from_named(vec![("CH4", 100.0)]);
        assert_eq!(sample.amount(Component::Oxygen), 0.0);
        assert_eq!(sample.total(), 100.0);
    }
}
